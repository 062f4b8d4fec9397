//! Row-to-entity parsing helpers and small SQL utilities.

use chrono::{DateTime, Utc};
use tally_core::enums::AnnotationFamily;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all tally-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a non-negative INTEGER column as `u64`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value is negative.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u64, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u64::try_from(raw).map_err(|_| DatabaseError::Query(format!("negative count {raw}")))
}

/// Bind a `u64` page bound as an SQL integer, saturating at `i64::MAX`.
#[must_use]
pub fn sql_int(value: u64) -> libsql::Value {
    libsql::Value::Integer(i64::try_from(value).unwrap_or(i64::MAX))
}

/// Map an annotation family to its table.
///
/// Uses exhaustive match so table names never come from input.
#[must_use]
pub const fn family_table(family: AnnotationFamily) -> &'static str {
    match family {
        AnnotationFamily::Copyright => "copyright",
        AnnotationFamily::Ip => "ip",
        AnnotationFamily::Ecc => "ecc",
        AnnotationFamily::ExportControl => "export_control",
    }
}

/// Generate a prefixed id (`aud-a3f8b2c1`) on the given connection.
///
/// Takes a connection rather than the database so it can run inside an open
/// transaction.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails or returns no rows.
pub async fn generate_id(conn: &libsql::Connection, prefix: &str) -> Result<String, DatabaseError> {
    let mut rows = conn
        .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<String>(0)?)
}

/// Commit `tx` if `result` is `Ok`; otherwise roll it back and return the error.
///
/// # Errors
///
/// Returns the error carried by `result`, or the commit failure.
pub(crate) async fn commit_or_rollback<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
    operation: &'static str,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(operation, %rollback, "rollback failed");
            }
            Err(error)
        }
    }
}
