use std::sync::LazyLock;

use regex::Regex;

static FILE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,127}$").unwrap());

/// Whether `name` can be used as a document identifier. Generated UUIDs
/// always pass; anything containing separators or starting with a dot does not.
pub fn is_valid_file_name(name: &str) -> bool {
    FILE_NAME_RE.is_match(name)
}

/// Checks that `text` is a complete JSON text (any value, not only objects).
pub fn parse_json_text(text: &str) -> Result<(), serde_json::Error> {
    serde_json::from_str::<serde::de::IgnoredAny>(text).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_generated_identifiers() {
        let id = uuid::Uuid::new_v4().to_string();
        assert!(is_valid_file_name(&id));
        assert!(is_valid_file_name("abc"));
        assert!(is_valid_file_name("v1.2_final-draft"));
    }

    #[test]
    fn rejects_unsafe_identifiers() {
        assert!(!is_valid_file_name(""));
        assert!(!is_valid_file_name("."));
        assert!(!is_valid_file_name(".."));
        assert!(!is_valid_file_name(".hidden"));
        assert!(!is_valid_file_name("a/b"));
        assert!(!is_valid_file_name("a\\b"));
        assert!(!is_valid_file_name("a b"));
        assert!(!is_valid_file_name(&"a".repeat(129)));
    }

    #[test]
    fn json_text_detection() {
        assert!(parse_json_text("{\"a\":1}").is_ok());
        assert!(parse_json_text("[1, 2, 3]").is_ok());
        assert!(parse_json_text("\"just a string\"").is_ok());
        assert!(parse_json_text(" 42 ").is_ok());
        assert!(parse_json_text("").is_err());
        assert!(parse_json_text("{'a': 1}").is_err());
        assert!(parse_json_text("{} trailing").is_err());
    }

    #[test]
    fn parse_failure_reports_the_cause() {
        let err = parse_json_text("{\"a\":").unwrap_err();
        assert!(err.is_eof());
        assert!(err.to_string().contains("EOF"));

        let err = parse_json_text("{} trailing").unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.line(), 1);
    }
}
