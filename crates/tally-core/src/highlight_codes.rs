//! Raw highlight type codes written by the license scanners.
//!
//! Codes are one or two characters; the second character is sometimes a
//! trailing space. Every code that may appear in a `highlight` or
//! `highlight_keyword` row is listed in [`CODE_TABLE`]. Anything else is a
//! data-integrity problem and decoding fails.

use crate::entities::{Highlight, RawInterval};
use crate::enums::HighlightType;
use crate::errors::CoreError;

/// Code written for keyword rows, which carry no type column of their own.
pub const KEYWORD_CODE: &str = "K";

/// Every known raw code and the canonical type it normalizes to.
pub const CODE_TABLE: &[(&str, HighlightType)] = &[
    ("M", HighlightType::Match),
    ("M ", HighlightType::Match),
    ("M0", HighlightType::Match),
    ("M+", HighlightType::Added),
    ("M-", HighlightType::Deleted),
    ("MR", HighlightType::Changed),
    ("L", HighlightType::Signature),
    ("L ", HighlightType::Signature),
    ("K", HighlightType::Keyword),
    ("K ", HighlightType::Keyword),
];

/// Normalize a raw code.
///
/// # Errors
///
/// Returns `CoreError::UnknownHighlightCode` for any code not in [`CODE_TABLE`].
pub fn decode(code: &str) -> Result<HighlightType, CoreError> {
    CODE_TABLE
        .iter()
        .find(|(raw, _)| *raw == code)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| CoreError::UnknownHighlightCode(code.to_string()))
}

impl RawInterval {
    /// Decode into a [`Highlight`], turning lengths into end offsets.
    ///
    /// Keyword rows never keep a reference interval or a license id, whatever
    /// the raw row holds.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownHighlightCode` if the code is not known.
    pub fn decode(&self) -> Result<Highlight, CoreError> {
        let kind = decode(&self.code)?;
        let (ref_start, ref_end, license_id) = if kind.is_diff() {
            (self.ref_start, self.ref_start + self.ref_len, self.license_id)
        } else {
            (0, 0, None)
        };
        Ok(Highlight {
            start: self.start,
            end: self.start + self.len,
            kind,
            ref_start,
            ref_end,
            license_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("M", HighlightType::Match)]
    #[case("M ", HighlightType::Match)]
    #[case("M0", HighlightType::Match)]
    #[case("M+", HighlightType::Added)]
    #[case("M-", HighlightType::Deleted)]
    #[case("MR", HighlightType::Changed)]
    #[case("L", HighlightType::Signature)]
    #[case("L ", HighlightType::Signature)]
    #[case("K", HighlightType::Keyword)]
    #[case("K ", HighlightType::Keyword)]
    fn decodes_known_codes(#[case] code: &str, #[case] expected: HighlightType) {
        assert_eq!(decode(code).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("MX")]
    #[case("m")]
    #[case("X")]
    #[case("M  ")]
    fn rejects_unknown_codes(#[case] code: &str) {
        let err = decode(code).unwrap_err();
        assert!(matches!(err, CoreError::UnknownHighlightCode(ref c) if c == code));
    }

    #[test]
    fn diff_interval_keeps_reference_and_license() {
        let raw = RawInterval {
            code: "M+".into(),
            start: 5,
            len: 10,
            ref_start: 100,
            ref_len: 7,
            license_id: Some(3),
        };
        assert_eq!(
            raw.decode().unwrap(),
            Highlight {
                start: 5,
                end: 15,
                kind: HighlightType::Added,
                ref_start: 100,
                ref_end: 107,
                license_id: Some(3),
            }
        );
    }

    #[test]
    fn keyword_interval_drops_reference() {
        let raw = RawInterval {
            code: KEYWORD_CODE.into(),
            start: 40,
            len: 9,
            ref_start: 12,
            ref_len: 4,
            license_id: Some(8),
        };
        let highlight = raw.decode().unwrap();
        assert_eq!(highlight.kind, HighlightType::Keyword);
        assert_eq!((highlight.ref_start, highlight.ref_end), (0, 0));
        assert_eq!(highlight.license_id, None);
        assert_eq!((highlight.start, highlight.end), (40, 49));
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        for (i, (a, _)) in CODE_TABLE.iter().enumerate() {
            assert!(
                CODE_TABLE.iter().skip(i + 1).all(|(b, _)| a != b),
                "duplicate code {a:?}"
            );
        }
    }
}
