//! Annotation audit repository.
//!
//! Append-only records of superseded annotation text. Rows are written only
//! by the update path of [`crate::repos::mutation`]; the schema rejects any
//! later UPDATE or DELETE.

use tally_core::entities::AuditRecord;
use tally_core::enums::AnnotationFamily;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::TallyService;

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub upload_id: Option<i64>,
    pub annotation_id: Option<i64>,
    pub family: Option<AnnotationFamily>,
    pub actor_id: Option<i64>,
    pub limit: Option<u32>,
}

/// Insert `record` on `conn`, which may be an open transaction.
pub(crate) async fn insert_audit_on(
    conn: &libsql::Connection,
    record: &AuditRecord,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO annotation_audit
             (audit_pk, family, ct_fk, oldtext, user_fk, upload_fk, uploadtree_pk, pfile_fk, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        libsql::params![
            record.id.as_str(),
            record.family.as_str(),
            record.annotation_id,
            record.prior_content.as_str(),
            record.actor_id,
            record.upload_id,
            record.tree_node_id,
            record.file_id,
            record.created_at.to_rfc3339()
        ],
    )
    .await?;
    Ok(())
}

fn row_to_record(row: &libsql::Row) -> Result<AuditRecord, DatabaseError> {
    Ok(AuditRecord {
        id: row.get::<String>(0)?,
        family: parse_enum(&row.get::<String>(1)?)?,
        annotation_id: row.get::<i64>(2)?,
        prior_content: row.get::<String>(3)?,
        actor_id: row.get::<i64>(4)?,
        upload_id: row.get::<i64>(5)?,
        tree_node_id: row.get::<i64>(6)?,
        file_id: row.get::<i64>(7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl TallyService {
    /// Append an audit record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn insert_audit_record(&self, record: &AuditRecord) -> Result<(), DatabaseError> {
        insert_audit_on(self.db().conn(), record).await
    }

    /// Query audit records with optional filters, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_audit(&self, filter: &AuditFilter) -> Result<Vec<AuditRecord>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(upload_id) = filter.upload_id {
            params.push(libsql::Value::Integer(upload_id));
            conditions.push(format!("upload_fk = ?{}", params.len()));
        }
        if let Some(annotation_id) = filter.annotation_id {
            params.push(libsql::Value::Integer(annotation_id));
            conditions.push(format!("ct_fk = ?{}", params.len()));
        }
        if let Some(family) = filter.family {
            params.push(libsql::Value::Text(family.as_str().to_string()));
            conditions.push(format!("family = ?{}", params.len()));
        }
        if let Some(actor_id) = filter.actor_id {
            params.push(libsql::Value::Integer(actor_id));
            conditions.push(format!("user_fk = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT audit_pk, family, ct_fk, oldtext, user_fk, upload_fk, uploadtree_pk, pfile_fk, created_at
             FROM annotation_audit {where_clause}
             ORDER BY created_at DESC, rowid DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }
}
