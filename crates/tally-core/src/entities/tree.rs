use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry (file or folder) in an upload's file hierarchy.
///
/// `file_id` is `None` for folders and other entries without file content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TreeNode {
    pub id: i64,
    pub upload_id: i64,
    pub parent_id: Option<i64>,
    pub file_id: Option<i64>,
    pub name: String,
    pub left: i64,
    pub right: i64,
}

impl TreeNode {
    #[must_use]
    pub const fn bounds(&self) -> TreeBounds {
        TreeBounds {
            left: self.left,
            right: self.right,
        }
    }
}

/// Nested-set interval of a tree node and all of its descendants.
///
/// Membership is inclusive at both ends, so a node's own `left` lies inside
/// its own bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct TreeBounds {
    pub left: i64,
    pub right: i64,
}

impl TreeBounds {
    #[must_use]
    pub const fn new(left: i64, right: i64) -> Self {
        Self { left, right }
    }

    /// Whether a node with the given `left` value lies in this range.
    #[must_use]
    pub const fn contains(&self, left: i64) -> bool {
        self.left <= left && left <= self.right
    }

    /// Whether `other` is strictly nested inside this range.
    #[must_use]
    pub const fn encloses(&self, other: &Self) -> bool {
        self.left < other.left && other.right < self.right
    }
}

/// The request-side identity of a subtree: which upload, which node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct TreeScope {
    pub upload_id: i64,
    pub tree_node_id: i64,
}

/// A resolved subtree: the upload plus the node's nested-set bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct TreeRange {
    pub upload_id: i64,
    pub bounds: TreeBounds,
}
