//! Permission boundary.
//!
//! Tally never decides who may see or edit an upload. The integrator supplies
//! a [`PermissionCheck`]; the `checked_*` entry points consult it with the
//! explicit actor id before delegating to the unchecked operation.

use tally_core::bucket_ref::BucketRef;
use tally_core::entities::{AuditRecord, Highlight, HistogramPage, TreeScope};
use tally_core::enums::AnnotationKind;
use tally_core::query::{HistogramFilter, HistogramSort, Page};

use crate::error::DatabaseError;
use crate::repos::audit::AuditFilter;
use crate::repos::highlight::HighlightSelection;
use crate::service::TallyService;

/// Decides whether an actor may read or modify an upload's annotations.
pub trait PermissionCheck: Send + Sync {
    fn can_read(&self, actor_id: i64, upload_id: i64) -> bool;
    fn can_write(&self, actor_id: i64, upload_id: i64) -> bool;
}

/// Grants everything. The default for local use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl PermissionCheck for AllowAll {
    fn can_read(&self, _actor_id: i64, _upload_id: i64) -> bool {
        true
    }

    fn can_write(&self, _actor_id: i64, _upload_id: i64) -> bool {
        true
    }
}

impl TallyService {
    /// # Errors
    ///
    /// Returns `DatabaseError::PermissionDenied` if the actor may not read.
    pub fn require_read(&self, actor_id: i64, upload_id: i64) -> Result<(), DatabaseError> {
        if self.permissions().can_read(actor_id, upload_id) {
            Ok(())
        } else {
            tracing::warn!(actor_id, upload_id, "read refused");
            Err(DatabaseError::PermissionDenied {
                actor_id,
                upload_id,
                action: "read",
            })
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::PermissionDenied` if the actor may not write.
    pub fn require_write(&self, actor_id: i64, upload_id: i64) -> Result<(), DatabaseError> {
        if self.permissions().can_write(actor_id, upload_id) {
            Ok(())
        } else {
            tracing::warn!(actor_id, upload_id, "write refused");
            Err(DatabaseError::PermissionDenied {
                actor_id,
                upload_id,
                action: "modify",
            })
        }
    }

    /// [`Self::aggregate_histogram`] after a read check.
    ///
    /// # Errors
    ///
    /// `PermissionDenied`, or any error of the unchecked operation.
    #[allow(clippy::too_many_arguments)]
    pub async fn checked_histogram(
        &self,
        actor_id: i64,
        scope: TreeScope,
        kind: AnnotationKind,
        agent_id: Option<i64>,
        filter: &HistogramFilter,
        sort: HistogramSort,
        page: Page,
    ) -> Result<HistogramPage, DatabaseError> {
        self.require_read(actor_id, scope.upload_id)?;
        let range = self.tree_range(scope).await?;
        self.aggregate_histogram(&range, kind, agent_id, filter, sort, page)
            .await
    }

    /// [`Self::update_annotations`] after a write check.
    ///
    /// # Errors
    ///
    /// `PermissionDenied`, or any error of the unchecked operation.
    pub async fn checked_update(
        &self,
        actor_id: i64,
        target: &BucketRef,
        new_content: &str,
    ) -> Result<u64, DatabaseError> {
        self.require_write(actor_id, target.upload_id)?;
        self.update_annotations(target.scope(), &target.hash, target.kind, new_content, actor_id)
            .await
    }

    /// [`Self::delete_annotations`] after a write check.
    ///
    /// # Errors
    ///
    /// `PermissionDenied`, or any error of the unchecked operation.
    pub async fn checked_delete(
        &self,
        actor_id: i64,
        target: &BucketRef,
    ) -> Result<u64, DatabaseError> {
        self.require_write(actor_id, target.upload_id)?;
        self.delete_annotations(target.scope(), &target.hash, target.kind)
            .await
    }

    /// [`Self::merge_highlights`] after a read check.
    ///
    /// # Errors
    ///
    /// `PermissionDenied`, or any error of the unchecked operation.
    pub async fn checked_highlights(
        &self,
        actor_id: i64,
        file: TreeScope,
        selection: &HighlightSelection,
    ) -> Result<Vec<Highlight>, DatabaseError> {
        self.require_read(actor_id, file.upload_id)?;
        self.merge_highlights(file, selection).await
    }

    /// [`Self::list_audit`] narrowed to `upload_id` after a read check.
    /// Any upload already set on `filter` is replaced.
    ///
    /// # Errors
    ///
    /// `PermissionDenied`, or any error of the unchecked operation.
    pub async fn checked_list_audit(
        &self,
        actor_id: i64,
        upload_id: i64,
        filter: AuditFilter,
    ) -> Result<Vec<AuditRecord>, DatabaseError> {
        self.require_read(actor_id, upload_id)?;
        self.list_audit(&AuditFilter {
            upload_id: Some(upload_id),
            ..filter
        })
        .await
    }
}
