//! Copyright notices for a package's README.

use crate::error::DatabaseError;
use crate::service::TallyService;

impl TallyService {
    /// Distinct copyright statements anywhere in `upload_id` that start with
    /// "Copyright" (ASCII case-insensitive), ordered by text.
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown upload
    /// - any storage error
    pub async fn copyright_notices(&self, upload_id: i64) -> Result<Vec<String>, DatabaseError> {
        // Distinguishes an unknown upload from one with no notices.
        self.upload_filename(upload_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DISTINCT cp.content FROM copyright AS cp
                 WHERE cp.type = 'statement' AND cp.content LIKE 'copyright%'
                   AND cp.pfile_fk IN (
                     SELECT ut.pfile_fk FROM uploadtree AS ut
                     WHERE ut.upload_fk = ?1 AND ut.pfile_fk IS NOT NULL)
                 ORDER BY cp.content",
                [upload_id],
            )
            .await?;
        let mut notices = Vec::new();
        while let Some(row) = rows.next().await? {
            notices.push(row.get::<String>(0)?);
        }
        tracing::debug!(upload_id, count = notices.len(), "collected copyright notices");
        Ok(notices)
    }
}
