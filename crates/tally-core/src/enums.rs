//! Annotation families and kinds, sort keys, and highlight types.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` returning the exact string stored in SQL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AnnotationFamily
// ---------------------------------------------------------------------------

/// Physical annotation subset. Each family is stored in its own table with a
/// shared schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationFamily {
    Copyright,
    Ip,
    Ecc,
    ExportControl,
}

impl AnnotationFamily {
    pub const ALL: [Self; 4] = [Self::Copyright, Self::Ip, Self::Ecc, Self::ExportControl];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Copyright => "copyright",
            Self::Ip => "ip",
            Self::Ecc => "ecc",
            Self::ExportControl => "export_control",
        }
    }
}

impl fmt::Display for AnnotationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnnotationKind
// ---------------------------------------------------------------------------

/// Sub-kind tag stored in an annotation row's `type` column.
///
/// ```text
/// copyright family: statement, email, url, author
/// ip family:        ip
/// ecc family:       ecc
/// export_control:   export_control
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Statement,
    Email,
    Url,
    Author,
    Ip,
    Ecc,
    ExportControl,
}

impl AnnotationKind {
    pub const ALL: [Self; 7] = [
        Self::Statement,
        Self::Email,
        Self::Url,
        Self::Author,
        Self::Ip,
        Self::Ecc,
        Self::ExportControl,
    ];

    /// The family (and therefore the table) holding rows of this kind.
    #[must_use]
    pub const fn family(self) -> AnnotationFamily {
        match self {
            Self::Statement | Self::Email | Self::Url | Self::Author => AnnotationFamily::Copyright,
            Self::Ip => AnnotationFamily::Ip,
            Self::Ecc => AnnotationFamily::Ecc,
            Self::ExportControl => AnnotationFamily::ExportControl,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Statement => "statement",
            Self::Email => "email",
            Self::Url => "url",
            Self::Author => "author",
            Self::Ip => "ip",
            Self::Ecc => "ecc",
            Self::ExportControl => "export_control",
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SortColumn / SortDirection
// ---------------------------------------------------------------------------

/// Histogram column to order buckets by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Count,
    Content,
}

impl SortColumn {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// SQL keyword for an `ORDER BY` term.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HighlightType
// ---------------------------------------------------------------------------

/// Canonical highlight type. Raw per-row codes are normalized to one of
/// these by [`crate::highlight_codes::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HighlightType {
    Match,
    Added,
    Deleted,
    Changed,
    Signature,
    Keyword,
}

impl HighlightType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Changed => "changed",
            Self::Signature => "signature",
            Self::Keyword => "keyword",
        }
    }

    /// Whether entries of this type are derived from a license diff and so
    /// carry a reference-text interval.
    #[must_use]
    pub const fn is_diff(self) -> bool {
        !matches!(self, Self::Keyword)
    }
}

impl fmt::Display for HighlightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
