//! Presentation identity of a histogram row.
//!
//! Rendered lists key each bucket by `upload,item,hash,kind` so that an edit
//! or delete control can be traced back to the scope it was shown in.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::TreeScope;
use crate::enums::AnnotationKind;
use crate::errors::CoreError;

/// `(upload, tree node, content hash, kind)` identifying one bucket in one scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct BucketRef {
    pub upload_id: i64,
    pub tree_node_id: i64,
    pub hash: String,
    pub kind: AnnotationKind,
}

impl BucketRef {
    #[must_use]
    pub const fn scope(&self) -> TreeScope {
        TreeScope {
            upload_id: self.upload_id,
            tree_node_id: self.tree_node_id,
        }
    }
}

impl fmt::Display for BucketRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.upload_id, self.tree_node_id, self.hash, self.kind
        )
    }
}

impl FromStr for BucketRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| CoreError::InvalidBucketRef {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split(',').collect();
        let [upload, item, hash, kind] = parts.as_slice() else {
            return Err(invalid(format!("expected 4 parts, got {}", parts.len())));
        };

        let upload_id = upload
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(format!("upload id: {e}")))?;
        let tree_node_id = item
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid(format!("tree node id: {e}")))?;
        let hash = hash.trim();
        if hash.is_empty() {
            return Err(invalid("hash is empty".into()));
        }
        let kind = kind
            .trim()
            .parse::<AnnotationKind>()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            upload_id,
            tree_node_id,
            hash: hash.to_string(),
            kind,
        })
    }
}
