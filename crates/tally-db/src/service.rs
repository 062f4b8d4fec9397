//! Service layer over the annotation store.
//!
//! `TallyService` wraps `TallyDb` (raw database access), the per-family
//! `AuditPolicy`, and the integrator's `PermissionCheck`. All repo methods are
//! implemented as `impl TallyService` blocks in [`crate::repos`].

use std::sync::Arc;

use tally_core::policy::AuditPolicy;

use crate::TallyDb;
use crate::error::DatabaseError;
use crate::permission::{AllowAll, PermissionCheck};

/// Entry point for every annotation operation.
///
/// Mutations follow one protocol:
/// 1. Validate arguments (nothing touches the store on failure)
/// 2. Resolve the tree range
/// 3. Begin an immediate transaction
/// 4. Capture prior values into the audit log if the family's policy says so
/// 5. Rewrite or delete the matched rows
/// 6. Commit, or roll back on any error
pub struct TallyService {
    db: TallyDb,
    policy: AuditPolicy,
    permissions: Arc<dyn PermissionCheck>,
}

impl TallyService {
    /// Create a service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `policy` - Which families leave an audit record on update.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, policy: AuditPolicy) -> Result<Self, DatabaseError> {
        let db = TallyDb::open_local(db_path).await?;
        Ok(Self::from_db(db, policy))
    }

    /// Create from an existing `TallyDb`. Permissions default to [`AllowAll`].
    #[must_use]
    pub fn from_db(db: TallyDb, policy: AuditPolicy) -> Self {
        Self {
            db,
            policy,
            permissions: Arc::new(AllowAll),
        }
    }

    /// Replace the permission collaborator.
    #[must_use]
    pub fn with_permissions(mut self, permissions: Arc<dyn PermissionCheck>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TallyDb {
        &self.db
    }

    #[must_use]
    pub const fn policy(&self) -> &AuditPolicy {
        &self.policy
    }

    pub(crate) fn permissions(&self) -> &dyn PermissionCheck {
        self.permissions.as_ref()
    }
}
