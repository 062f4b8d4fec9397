use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AnnotationKind;

/// One detected annotation attached to a file. Rows are created by upstream
/// scanners; only `content` and `hash` are ever rewritten.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Annotation {
    pub id: i64,
    pub agent_id: i64,
    pub file_id: i64,
    pub kind: AnnotationKind,
    pub content: String,
    pub hash: String,
}
