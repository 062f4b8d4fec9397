//! CLI response types returned as JSON by `tally` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bucket_ref::BucketRef;
use crate::entities::{AuditRecord, Highlight, HistogramBucket, TreeBounds};
use crate::enums::AnnotationKind;
use crate::query::{HistogramFilter, HistogramSort};

/// A histogram bucket together with the identity used by edit/delete controls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistogramRow {
    pub row_id: String,
    #[serde(flatten)]
    pub bucket: HistogramBucket,
}

/// Response from `tally histogram`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistogramResponse {
    pub upload_id: i64,
    pub tree_node_id: i64,
    pub kind: AnnotationKind,
    pub agent_id: Option<i64>,
    pub filter: HistogramFilter,
    pub sort: HistogramSort,
    pub offset: u64,
    pub limit: u64,
    pub rows: Vec<HistogramRow>,
    pub total_matching: u64,
    pub total_unfiltered: u64,
}

impl HistogramResponse {
    /// Key each bucket by its `upload,item,hash,kind` row identity.
    #[must_use]
    pub fn rows_for(
        upload_id: i64,
        tree_node_id: i64,
        kind: AnnotationKind,
        buckets: Vec<HistogramBucket>,
    ) -> Vec<HistogramRow> {
        buckets
            .into_iter()
            .map(|bucket| HistogramRow {
                row_id: BucketRef {
                    upload_id,
                    tree_node_id,
                    hash: bucket.hash.clone(),
                    kind,
                }
                .to_string(),
                bucket,
            })
            .collect()
    }
}

/// Response from `tally update`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateResponse {
    pub target: BucketRef,
    pub new_hash: String,
    pub rows_updated: u64,
}

/// Response from `tally delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub target: BucketRef,
    pub rows_deleted: u64,
}

/// Response from `tally highlights`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HighlightsResponse {
    pub upload_id: i64,
    pub tree_node_id: i64,
    pub highlights: Vec<Highlight>,
}

/// Response from `tally audit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditListResponse {
    pub records: Vec<AuditRecord>,
}

/// Response from `tally resolve`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolveResponse {
    pub upload_id: i64,
    pub tree_node_id: i64,
    pub bounds: TreeBounds,
}

/// Response from `tally notices`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NoticesResponse {
    pub upload_id: i64,
    pub package_name: String,
    pub notices: Vec<String>,
}
