//! Highlight repository: diff and keyword intervals for one file.

use tally_core::entities::{Highlight, RawInterval, TreeScope};
use tally_core::highlight_codes::KEYWORD_CODE;

use crate::error::DatabaseError;
use crate::service::TallyService;

/// Optional narrowing of the diff intervals. Keyword intervals are never
/// narrowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightSelection {
    /// Only findings of this license (`license_file.rf_fk`).
    pub license_id: Option<i64>,
    /// Only findings written by this agent.
    pub agent_id: Option<i64>,
    /// Only this finding (`license_file.fl_pk`).
    pub highlight_id: Option<i64>,
}

impl TallyService {
    /// Diff-derived intervals for the file at `file`, ordered by start offset
    /// then storage order.
    ///
    /// Only codes beginning with `M` or `L` are read; they are returned
    /// undecoded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn fetch_diff_intervals(
        &self,
        file: TreeScope,
        selection: &HighlightSelection,
    ) -> Result<Vec<RawInterval>, DatabaseError> {
        let mut params = vec![
            libsql::Value::Integer(file.tree_node_id),
            libsql::Value::Integer(file.upload_id),
        ];
        let mut conditions = Vec::new();
        for (column, value) in [
            ("lf.rf_fk", selection.license_id),
            ("lf.agent_fk", selection.agent_id),
            ("lf.fl_pk", selection.highlight_id),
        ] {
            if let Some(value) = value {
                params.push(libsql::Value::Integer(value));
                conditions.push(format!(" AND {column} = ?{}", params.len()));
            }
        }

        let sql = format!(
            "SELECT h.type, h.start, h.len, h.rf_start, h.rf_len, lf.rf_fk
             FROM highlight AS h
             JOIN license_file AS lf ON lf.fl_pk = h.fl_fk
             JOIN uploadtree AS ut ON ut.pfile_fk = lf.pfile_fk
             WHERE ut.uploadtree_pk = ?1 AND ut.upload_fk = ?2
               AND substr(h.type, 1, 1) IN ('M', 'L'){}
             ORDER BY h.start, h.rowid",
            conditions.concat()
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut intervals = Vec::new();
        while let Some(row) = rows.next().await? {
            intervals.push(RawInterval {
                code: row.get::<String>(0)?,
                start: row.get::<i64>(1)?,
                len: row.get::<i64>(2)?,
                ref_start: row.get::<i64>(3)?,
                ref_len: row.get::<i64>(4)?,
                license_id: row.get::<Option<i64>>(5)?,
            });
        }
        Ok(intervals)
    }

    /// Keyword intervals for the file at `file`, ordered by start offset.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn fetch_keyword_intervals(
        &self,
        file: TreeScope,
    ) -> Result<Vec<RawInterval>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT k.start, k.len
                 FROM highlight_keyword AS k
                 JOIN uploadtree AS ut ON ut.pfile_fk = k.pfile_fk
                 WHERE ut.uploadtree_pk = ?1 AND ut.upload_fk = ?2
                 ORDER BY k.start, k.rowid",
                libsql::params![file.tree_node_id, file.upload_id],
            )
            .await?;
        let mut intervals = Vec::new();
        while let Some(row) = rows.next().await? {
            intervals.push(RawInterval {
                code: KEYWORD_CODE.to_string(),
                start: row.get::<i64>(0)?,
                len: row.get::<i64>(1)?,
                ref_start: 0,
                ref_len: 0,
                license_id: None,
            });
        }
        Ok(intervals)
    }

    /// All highlights for one file: diff intervals first, then keyword
    /// intervals. Overlaps are kept as stored.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the node is not part of the upload's tree
    /// - `InvalidArgument` if a stored type code is unknown
    pub async fn merge_highlights(
        &self,
        file: TreeScope,
        selection: &HighlightSelection,
    ) -> Result<Vec<Highlight>, DatabaseError> {
        let node = self.get_tree_node(file.upload_id, file.tree_node_id).await?;
        if node.file_id.is_none() {
            tracing::debug!(node = node.id, "no file behind node, no highlights");
            return Ok(Vec::new());
        }

        let diff = self.fetch_diff_intervals(file, selection).await?;
        let keywords = self.fetch_keyword_intervals(file).await?;
        tracing::debug!(
            node = node.id,
            diff = diff.len(),
            keywords = keywords.len(),
            "merging highlights"
        );

        diff.iter()
            .chain(&keywords)
            .map(|raw| raw.decode().map_err(DatabaseError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tally_core::entities::{Highlight, TreeScope};
    use tally_core::enums::HighlightType;

    use super::HighlightSelection;
    use crate::error::ErrorKind;
    use crate::test_support::helpers::seeded_service;

    fn file(upload_id: i64, tree_node_id: i64) -> TreeScope {
        TreeScope {
            upload_id,
            tree_node_id,
        }
    }

    #[tokio::test]
    async fn merge_is_diff_then_keywords() {
        let (svc, fx) = seeded_service().await;
        let scope = file(fx.upload, fx.file_a);
        let selection = HighlightSelection::default();

        let diff = svc.fetch_diff_intervals(scope, &selection).await.unwrap();
        let keywords = svc.fetch_keyword_intervals(scope).await.unwrap();
        let merged = svc.merge_highlights(scope, &selection).await.unwrap();

        assert_eq!(merged.len(), diff.len() + keywords.len());
        let kinds: Vec<_> = merged.iter().map(|h| h.kind).collect();
        assert_eq!(
            kinds,
            vec![
                HighlightType::Match,
                HighlightType::Added,
                HighlightType::Signature,
                HighlightType::Changed,
                HighlightType::Keyword,
                HighlightType::Keyword,
            ]
        );
    }

    #[tokio::test]
    async fn diff_entries_carry_reference_and_license() {
        let (svc, fx) = seeded_service().await;
        let merged = svc
            .merge_highlights(file(fx.upload, fx.file_a), &HighlightSelection::default())
            .await
            .unwrap();

        assert_eq!(
            merged[0],
            Highlight {
                start: 0,
                end: 10,
                kind: HighlightType::Match,
                ref_start: 0,
                ref_end: 10,
                license_id: Some(fx.mit_license_id),
            }
        );
        assert_eq!((merged[1].start, merged[1].end), (20, 25));
        assert_eq!((merged[1].ref_start, merged[1].ref_end), (12, 12));
        assert_eq!((merged[3].ref_start, merged[3].ref_end), (30, 36));
    }

    #[tokio::test]
    async fn keyword_entries_have_empty_reference() {
        let (svc, fx) = seeded_service().await;
        let merged = svc
            .merge_highlights(file(fx.upload, fx.file_a), &HighlightSelection::default())
            .await
            .unwrap();

        let keywords: Vec<_> = merged
            .iter()
            .filter(|h| h.kind == HighlightType::Keyword)
            .collect();
        assert_eq!(keywords.len(), 2);
        for keyword in &keywords {
            assert_eq!((keyword.ref_start, keyword.ref_end), (0, 0));
            assert_eq!(keyword.license_id, None);
        }
        // Ordered by start, not insertion.
        assert_eq!((keywords[0].start, keywords[0].end), (5, 8));
        assert_eq!((keywords[1].start, keywords[1].end), (80, 87));
    }

    #[tokio::test]
    async fn selection_narrows_diff_only() {
        let (svc, fx) = seeded_service().await;
        let scope = file(fx.upload, fx.file_a);

        let by_agent = HighlightSelection {
            agent_id: Some(fx.other_agent),
            ..HighlightSelection::default()
        };
        let merged = svc.merge_highlights(scope, &by_agent).await.unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].kind, HighlightType::Changed);

        let by_finding = HighlightSelection {
            highlight_id: Some(fx.mit_finding),
            ..HighlightSelection::default()
        };
        let diff = svc.fetch_diff_intervals(scope, &by_finding).await.unwrap();
        assert_eq!(diff.len(), 3);

        let by_license = HighlightSelection {
            license_id: Some(2),
            ..HighlightSelection::default()
        };
        assert!(svc.fetch_diff_intervals(scope, &by_license).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn directory_and_plain_files_have_no_highlights() {
        let (svc, fx) = seeded_service().await;
        let selection = HighlightSelection::default();
        assert!(svc
            .merge_highlights(file(fx.upload, fx.src_dir), &selection)
            .await
            .unwrap()
            .is_empty());
        assert!(svc
            .merge_highlights(file(fx.upload, fx.file_b), &selection)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn unknown_code_fails_decoding() {
        let (svc, fx) = seeded_service().await;
        svc.db()
            .conn()
            .execute(
                "INSERT INTO highlight (fl_fk, type, start, len) VALUES (1, 'MX', 90, 2)",
                (),
            )
            .await
            .unwrap();

        let err = svc
            .merge_highlights(file(fx.upload, fx.file_a), &HighlightSelection::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn unknown_node_is_not_found() {
        let (svc, fx) = seeded_service().await;
        let err = svc
            .merge_highlights(file(fx.upload, 404), &HighlightSelection::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
