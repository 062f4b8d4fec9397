//! Histogram query inputs: filter, sort order and page window.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AnnotationKind, SortColumn, SortDirection};
use crate::errors::CoreError;

/// License short names that count as "no license found" for
/// [`HistogramFilter::NoLicenseFound`].
pub const NO_LICENSE_SHORTNAMES: [&str; 2] = ["No_license_found", "Void"];

/// Row filter applied before counting the "matching" total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "pattern", rename_all = "snake_case")]
pub enum HistogramFilter {
    #[default]
    None,
    /// Keep rows whose file has a `No_license_found` or `Void` finding.
    NoLicenseFound,
    /// Case-insensitive literal substring match on content.
    TextContains(String),
}

impl HistogramFilter {
    /// The filter that actually applies to `kind`.
    ///
    /// `NoLicenseFound` only means something for statements and an empty
    /// search pattern matches everything; both collapse to `None`.
    #[must_use]
    pub fn effective_for(&self, kind: AnnotationKind) -> Self {
        match self {
            Self::NoLicenseFound if kind == AnnotationKind::Statement => Self::NoLicenseFound,
            Self::TextContains(pattern) if !pattern.is_empty() => {
                Self::TextContains(pattern.clone())
            }
            _ => Self::None,
        }
    }
}

/// Case-insensitive literal substring test behind
/// [`HistogramFilter::TextContains`]. Both sides are Unicode-lowercased, so
/// wildcards carry no meaning and "MÜLLER" finds "Müller".
#[must_use]
pub fn text_contains(content: &str, pattern: &str) -> bool {
    content.to_lowercase().contains(&pattern.to_lowercase())
}

/// Histogram ordering. Defaults to most frequent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HistogramSort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for HistogramSort {
    fn default() -> Self {
        Self {
            column: SortColumn::Count,
            direction: SortDirection::Desc,
        }
    }
}

/// Offset/limit window over the sorted histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawPage")]
pub struct Page {
    offset: u64,
    limit: u64,
}

/// Unvalidated wire form of [`Page`].
#[derive(Deserialize, JsonSchema)]
struct RawPage {
    offset: u64,
    limit: u64,
}

impl TryFrom<RawPage> for Page {
    type Error = CoreError;

    fn try_from(raw: RawPage) -> Result<Self, Self::Error> {
        Self::new(raw.offset, raw.limit)
    }
}

impl Page {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `limit` is zero.
    pub fn new(offset: u64, limit: u64) -> Result<Self, CoreError> {
        if limit == 0 {
            return Err(CoreError::Validation("page limit must be positive".into()));
        }
        Ok(Self { offset, limit })
    }

    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// The page that follows this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}
