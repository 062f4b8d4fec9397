//! Tree repository: nested-set range resolution over `uploadtree`.

use tally_core::entities::{TreeBounds, TreeNode, TreeRange, TreeScope};

use crate::error::DatabaseError;
use crate::service::TallyService;

/// `uploadtree` predicate selecting the files under a range.
///
/// Expects `upload_fk`, `lft` lower bound and upper bound at parameter
/// positions `first`, `first + 1`, `first + 2`.
pub(crate) fn files_in_range(first: usize) -> String {
    format!(
        "SELECT ut.pfile_fk FROM uploadtree AS ut
         WHERE ut.upload_fk = ?{} AND ut.lft BETWEEN ?{} AND ?{} AND ut.pfile_fk IS NOT NULL",
        first,
        first + 1,
        first + 2
    )
}

/// Parameters matching [`files_in_range`].
pub(crate) fn range_params(range: &TreeRange) -> [libsql::Value; 3] {
    [
        libsql::Value::Integer(range.upload_id),
        libsql::Value::Integer(range.bounds.left),
        libsql::Value::Integer(range.bounds.right),
    ]
}

fn row_to_node(row: &libsql::Row) -> Result<TreeNode, DatabaseError> {
    Ok(TreeNode {
        id: row.get::<i64>(0)?,
        upload_id: row.get::<i64>(1)?,
        parent_id: row.get::<Option<i64>>(2)?,
        file_id: row.get::<Option<i64>>(3)?,
        name: row.get::<String>(4)?,
        left: row.get::<i64>(5)?,
        right: row.get::<i64>(6)?,
    })
}

impl TallyService {
    /// Nested-set bounds of `node_id` within `upload_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the node is not part of the upload's tree.
    pub async fn resolve_tree_range(
        &self,
        upload_id: i64,
        node_id: i64,
    ) -> Result<TreeBounds, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT lft, rgt FROM uploadtree WHERE uploadtree_pk = ?1 AND upload_fk = ?2",
                libsql::params![node_id, upload_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("tree node", node_id))?;
        let bounds = TreeBounds::new(row.get::<i64>(0)?, row.get::<i64>(1)?);
        tracing::debug!(upload_id, node_id, left = bounds.left, right = bounds.right, "resolved tree range");
        Ok(bounds)
    }

    /// Resolve a scope into the range every scoped query runs against.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown node.
    pub async fn tree_range(&self, scope: TreeScope) -> Result<TreeRange, DatabaseError> {
        let bounds = self
            .resolve_tree_range(scope.upload_id, scope.tree_node_id)
            .await?;
        Ok(TreeRange {
            upload_id: scope.upload_id,
            bounds,
        })
    }

    /// Fetch one tree node.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the node is not part of the upload's tree.
    pub async fn get_tree_node(
        &self,
        upload_id: i64,
        node_id: i64,
    ) -> Result<TreeNode, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT uploadtree_pk, upload_fk, parent, pfile_fk, ufile_name, lft, rgt
                 FROM uploadtree WHERE uploadtree_pk = ?1 AND upload_fk = ?2",
                libsql::params![node_id, upload_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("tree node", node_id))?;
        row_to_node(&row)
    }

    /// The root of an upload's tree: parentless, smallest `lft`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the upload has no tree.
    pub async fn root_node(&self, upload_id: i64) -> Result<TreeNode, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT uploadtree_pk, upload_fk, parent, pfile_fk, ufile_name, lft, rgt
                 FROM uploadtree WHERE upload_fk = ?1 AND parent IS NULL
                 ORDER BY lft LIMIT 1",
                [upload_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("upload", upload_id))?;
        row_to_node(&row)
    }

    /// The scanned package's file name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown upload.
    pub async fn upload_filename(&self, upload_id: i64) -> Result<String, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT upload_filename FROM upload WHERE upload_pk = ?1",
                [upload_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("upload", upload_id))?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::ErrorKind;
    use crate::test_support::helpers::seeded_service;

    #[tokio::test]
    async fn resolve_returns_node_bounds() {
        let (svc, fx) = seeded_service().await;
        let bounds = svc.resolve_tree_range(fx.upload, fx.src_dir).await.unwrap();
        assert_eq!((bounds.left, bounds.right), (10, 50));
    }

    #[tokio::test]
    async fn resolve_contains_own_left_and_nests_children() {
        let (svc, fx) = seeded_service().await;
        for node in fx.all_nodes() {
            let tree_node = svc.get_tree_node(fx.upload, node).await.unwrap();
            let bounds = svc.resolve_tree_range(fx.upload, node).await.unwrap();
            assert!(bounds.contains(tree_node.left));

            if let Some(parent) = tree_node.parent_id {
                let parent_bounds = svc.resolve_tree_range(fx.upload, parent).await.unwrap();
                assert!(parent_bounds.encloses(&bounds), "node {node} escapes parent {parent}");
            }
        }
    }

    #[tokio::test]
    async fn unknown_node_is_not_found() {
        let (svc, fx) = seeded_service().await;
        let err = svc.resolve_tree_range(fx.upload, 9999).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn node_of_other_upload_is_not_found() {
        let (svc, fx) = seeded_service().await;
        let err = svc
            .resolve_tree_range(fx.other_upload, fx.src_dir)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn root_node_is_parentless() {
        let (svc, fx) = seeded_service().await;
        let root = svc.root_node(fx.upload).await.unwrap();
        assert_eq!(root.id, fx.root);
        assert!(root.parent_id.is_none());
        assert_eq!(svc.root_node(424_242).await.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn upload_filename_lookup() {
        let (svc, fx) = seeded_service().await;
        assert_eq!(svc.upload_filename(fx.upload).await.unwrap(), "acme-1.0.tar.gz");
        assert_eq!(svc.upload_filename(77).await.unwrap_err().kind(), ErrorKind::NotFound);
    }
}
