//! # tally-core
//!
//! Core types, digests, and error types for Tally.
//!
//! This crate provides the foundational types shared across all Tally crates:
//! - Annotation families and kinds
//! - Tree bounds (nested-set intervals) and histogram buckets
//! - Highlight intervals and the exhaustive raw type-code table
//! - Histogram query inputs (filter, sort, page)
//! - The per-family audit policy
//! - Bucket row identities used by presentation layers
//! - The annotation content digest
//! - The README layout for copyright notices
//! - ID prefix constants
//! - Cross-cutting error types and CLI response types

pub mod bucket_ref;
pub mod digest;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod highlight_codes;
pub mod ids;
pub mod notices;
pub mod policy;
pub mod query;
pub mod responses;
