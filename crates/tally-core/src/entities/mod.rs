//! Entity structs for Tally domain objects.
//!
//! Persisted entities map to tables in the libSQL store; `HistogramBucket` and
//! `Highlight` are read models built per request. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod annotation;
mod audit;
mod bucket;
mod highlight;
mod tree;

pub use annotation::Annotation;
pub use audit::AuditRecord;
pub use bucket::{HistogramBucket, HistogramPage};
pub use highlight::{Highlight, RawInterval};
pub use tree::{TreeBounds, TreeNode, TreeRange, TreeScope};
