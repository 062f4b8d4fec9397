use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One deduplicated `(content, hash)` group with its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistogramBucket {
    pub content: String,
    pub hash: String,
    pub count: u64,
}

/// One page of a histogram plus the two group totals ("N of M").
///
/// `total_matching` counts groups surviving the filter, `total_unfiltered`
/// counts all groups in scope. The first never exceeds the second.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistogramPage {
    pub buckets: Vec<HistogramBucket>,
    pub total_matching: u64,
    pub total_unfiltered: u64,
}
