//! ID prefixes for rows generated by Tally.
//!
//! Annotation, tree and upload ids are integers assigned upstream. Only audit
//! records are created here; their ids are `{prefix}-{8 hex}` strings produced
//! by `TallyDb::generate_id`.

/// Prefix for audit record ids (`aud-a3f8b2c1`).
pub const PREFIX_AUDIT: &str = "aud";

/// Every prefix Tally generates.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_AUDIT];
