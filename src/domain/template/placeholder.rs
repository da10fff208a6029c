//! Placeholder scanning for template text.
//!
//! A placeholder is exactly `{{` + one or more word characters + `}}`.
//! Anything else (unbalanced braces, spaces inside braces, punctuation in the
//! name) is treated as literal text and never recognized.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The one placeholder pattern shared by extraction and rendering.
    pub(crate) static ref PLACEHOLDER_RE: Regex =
        Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap();
}

/// Extract the set of placeholder names referenced by `text`, in
/// first-occurrence order with duplicates removed.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple() {
        assert_eq!(
            extract_placeholders("Hello {{name}}, welcome to {{city}}"),
            vec!["name", "city"]
        );
    }

    #[test]
    fn test_extract_deduplicates_preserving_order() {
        assert_eq!(extract_placeholders("{{a}} {{b}} {{a}}"), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let text = "{{x}} and {{y}} and {{x}} again";
        let first = extract_placeholders(text);
        let second = extract_placeholders(text);
        assert_eq!(first, second);
        assert_eq!(first, vec!["x", "y"]);
    }

    #[test]
    fn test_malformed_tokens_ignored() {
        assert_eq!(extract_placeholders("{a} {{ b }} {{c}"), Vec::<String>::new());
        assert_eq!(extract_placeholders("{{with space}}"), Vec::<String>::new());
        assert_eq!(extract_placeholders("{{dotted.path}}"), Vec::<String>::new());
    }

    #[test]
    fn test_underscores_and_digits_allowed() {
        assert_eq!(
            extract_placeholders("{{short_name}} {{var2}}"),
            vec!["short_name", "var2"]
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_placeholders(""), Vec::<String>::new());
    }
}
