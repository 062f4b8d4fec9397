use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::HighlightType;

/// A typed half-open character interval `[start, end)` overlaid on a file's
/// displayed text.
///
/// Diff-derived entries pair it with `[ref_start, ref_end)` in the compared
/// license text. Keyword entries always carry `[0, 0)` and no license.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Highlight {
    pub start: i64,
    pub end: i64,
    #[serde(rename = "type")]
    pub kind: HighlightType,
    pub ref_start: i64,
    pub ref_end: i64,
    pub license_id: Option<i64>,
}

/// An interval row as stored by the scanner, before its type code is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInterval {
    pub code: String,
    pub start: i64,
    pub len: i64,
    pub ref_start: i64,
    pub ref_len: i64,
    pub license_id: Option<i64>,
}
