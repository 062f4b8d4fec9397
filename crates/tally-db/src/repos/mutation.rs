//! Audited mutation of annotation rows.
//!
//! Rows are addressed by `(kind, content hash)` within a tree range. Every
//! invocation runs inside one immediate transaction: the write lock is taken
//! before the matching rows are read, so capturing the prior text and
//! overwriting it cannot interleave with another writer.

use chrono::Utc;
use tally_core::digest::content_hash;
use tally_core::entities::{Annotation, AuditRecord, TreeRange, TreeScope};
use tally_core::enums::AnnotationKind;
use tally_core::ids::PREFIX_AUDIT;

use crate::error::DatabaseError;
use crate::helpers::{commit_or_rollback, family_table, generate_id, parse_enum};
use crate::repos::audit::insert_audit_on;
use crate::repos::tree::{files_in_range, range_params};
use crate::service::TallyService;

/// `WHERE` body matching rows of `kind` with `hash` in `range`.
fn matching_rows(range: &TreeRange, kind: AnnotationKind, hash: &str) -> (String, Vec<libsql::Value>) {
    let mut params: Vec<libsql::Value> = range_params(range).into();
    params.push(libsql::Value::Text(kind.as_str().to_string()));
    params.push(libsql::Value::Text(hash.to_string()));
    let clause = format!(
        "pfile_fk IN ({}) AND type = ?4 AND hash = ?5",
        files_in_range(1)
    );
    (clause, params)
}

async fn select_matching(
    conn: &libsql::Connection,
    range: &TreeRange,
    kind: AnnotationKind,
    hash: &str,
) -> Result<Vec<Annotation>, DatabaseError> {
    let (clause, params) = matching_rows(range, kind, hash);
    let sql = format!(
        "SELECT ct_pk, agent_fk, pfile_fk, type, content, hash FROM {} WHERE {clause} ORDER BY ct_pk",
        family_table(kind.family())
    );
    let mut rows = conn.query(&sql, libsql::params_from_iter(params)).await?;
    let mut matched = Vec::new();
    while let Some(row) = rows.next().await? {
        matched.push(Annotation {
            id: row.get::<i64>(0)?,
            agent_id: row.get::<i64>(1)?,
            file_id: row.get::<i64>(2)?,
            kind: parse_enum(&row.get::<String>(3)?)?,
            content: row.get::<String>(4)?,
            hash: row.get::<String>(5)?,
        });
    }
    Ok(matched)
}

impl TallyService {
    /// Replace the text of every row of `kind` with content hash `hash`
    /// under `scope`, recomputing the hash from `new_content`.
    ///
    /// When the family's audit policy is set, each row's prior text is
    /// archived together with `actor_id`, the row, its file and the scope.
    /// All rows change, or none do. Zero matches is `Ok(0)`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `new_content` is empty (nothing is written)
    /// - `NotFound` if the scope's tree node does not exist
    /// - any storage error, after rolling back
    pub async fn update_annotations(
        &self,
        scope: TreeScope,
        hash: &str,
        kind: AnnotationKind,
        new_content: &str,
        actor_id: i64,
    ) -> Result<u64, DatabaseError> {
        if new_content.is_empty() {
            return Err(DatabaseError::InvalidArgument(
                "empty content not allowed".into(),
            ));
        }

        let range = self.tree_range(scope).await?;
        let family = kind.family();
        let audit = self.policy().audit_on_update(family);
        let new_hash = content_hash(new_content);

        let tx = self
            .db()
            .conn()
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await?;

        let result = async {
            let matched = select_matching(&tx, &range, kind, hash).await?;
            let now = Utc::now();
            let update_sql = format!(
                "UPDATE {} SET content = ?1, hash = ?2 WHERE ct_pk = ?3",
                family_table(family)
            );

            let mut updated = 0_u64;
            for row in &matched {
                if audit {
                    let record = AuditRecord {
                        id: generate_id(&tx, PREFIX_AUDIT).await?,
                        family,
                        annotation_id: row.id,
                        prior_content: row.content.clone(),
                        actor_id,
                        upload_id: scope.upload_id,
                        tree_node_id: scope.tree_node_id,
                        file_id: row.file_id,
                        created_at: now,
                    };
                    insert_audit_on(&tx, &record).await?;
                }
                updated += tx
                    .execute(
                        &update_sql,
                        libsql::params![new_content, new_hash.as_str(), row.id],
                    )
                    .await?;
            }
            Ok::<_, DatabaseError>(updated)
        }
        .await;

        let updated = commit_or_rollback(tx, result, "update").await?;
        tracing::info!(
            upload_id = scope.upload_id,
            tree_node_id = scope.tree_node_id,
            %kind,
            hash,
            new_hash = %new_hash,
            rows = updated,
            audited = audit,
            "annotations updated"
        );
        Ok(updated)
    }

    /// Delete every row of `kind` with content hash `hash` under `scope`.
    ///
    /// Deletes are not audited. Zero matches is `Ok(0)`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the scope's tree node does not exist
    /// - any storage error, after rolling back
    pub async fn delete_annotations(
        &self,
        scope: TreeScope,
        hash: &str,
        kind: AnnotationKind,
    ) -> Result<u64, DatabaseError> {
        let range = self.tree_range(scope).await?;
        let (clause, params) = matching_rows(&range, kind, hash);
        let sql = format!(
            "DELETE FROM {} WHERE {clause}",
            family_table(kind.family())
        );

        let tx = self
            .db()
            .conn()
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await?;
        let result = tx
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(DatabaseError::from);
        let deleted = commit_or_rollback(tx, result, "delete").await?;

        tracing::info!(
            upload_id = scope.upload_id,
            tree_node_id = scope.tree_node_id,
            %kind,
            hash,
            rows = deleted,
            "annotations deleted"
        );
        Ok(deleted)
    }
}
