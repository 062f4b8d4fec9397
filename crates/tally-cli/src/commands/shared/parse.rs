use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use tally_core::enums::{AnnotationFamily, AnnotationKind, SortDirection};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let kind: AnnotationKind = parse_enum("statement", "kind").expect("kind should parse");
        assert_eq!(kind, AnnotationKind::Statement);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let family: AnnotationFamily =
            parse_enum("export-control", "family").expect("family should parse");
        assert_eq!(family, AnnotationFamily::ExportControl);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<SortDirection>("sideways", "order").expect_err("should fail");
        assert!(err.to_string().contains("invalid order 'sideways'"));
    }
}
