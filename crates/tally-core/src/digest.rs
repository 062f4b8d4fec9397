//! Annotation content digest.
//!
//! Rows are grouped and addressed by the lowercase hex MD5 of their text, the
//! same value scanners write into the `hash` column.

use md5::{Digest, Md5};

/// Digest of annotation `content`, as stored in the `hash` column.
#[must_use]
pub fn content_hash(content: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
