//! Repository modules implementing the annotation store operations.
//!
//! Each module adds methods to `TallyService` via `impl TallyService` blocks.

pub mod audit;
pub mod highlight;
pub mod histogram;
pub mod mutation;
pub mod notices;
pub mod tree;
