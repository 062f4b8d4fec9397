use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AnnotationFamily;

/// Immutable archive of an annotation's content at the moment it was corrected.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditRecord {
    pub id: String,
    pub family: AnnotationFamily,
    pub annotation_id: i64,
    pub prior_content: String,
    pub actor_id: i64,
    pub upload_id: i64,
    pub tree_node_id: i64,
    pub file_id: i64,
    pub created_at: DateTime<Utc>,
}
