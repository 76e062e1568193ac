//! Patterns and helpers shared by the rewrite pipelines.

use once_cell::sync::Lazy;
use regex::Regex;

/// `@header rest`
pub(crate) static HEADER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^@header (.+)$").unwrap());

/// `$mark rest`
pub(crate) static MARK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\$mark (.+)$").unwrap());

/// `$url(URL)[LABEL]` occupying the whole line
pub(crate) static URL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\$url\((.*?)\)\[(.*?)\]$").unwrap());

/// `@small rest`
pub(crate) static SMALL_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^@small (.+)$").unwrap());

/// `$cb rest`
pub(crate) static CODE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\$cb (.+)$").unwrap());

/// `- rest`
pub(crate) static LIST_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());

/// `(content)` with no parentheses or angle brackets inside; may span lines
pub(crate) static PAREN_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()<>]+)\)").unwrap());

/// `&content&` with no ampersand inside; may span lines
pub(crate) static AMP_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"&([^&]+)&").unwrap());

/// Returns true if the text contains an angle bracket, i.e. it already
/// carries output of an HTML-producing rule.
pub fn contains_markup(text: &str) -> bool {
    text.contains('<') || text.contains('>')
}

/// Wrap an HTML body in the minimal document shell
pub fn wrap_document(body: &str) -> String {
    format!("<html><body>{}</body></html>", body)
}

/// Render a one-line fenced code block
pub(crate) fn fenced(fence: &str, content: &str) -> String {
    format!("{fence}\n{content}\n{fence}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_markup() {
        assert!(contains_markup("<b>x"));
        assert!(contains_markup("a > b"));
        assert!(!contains_markup("plain text"));
    }

    #[test]
    fn test_wrap_document() {
        assert_eq!(wrap_document("hi"), "<html><body>hi</body></html>");
        assert_eq!(wrap_document(""), "<html><body></body></html>");
    }

    #[test]
    fn test_fenced() {
        assert_eq!(fenced("```", "let x = 1;"), "```\nlet x = 1;\n```");
        assert_eq!(fenced("~~~", "x"), "~~~\nx\n~~~");
    }

    #[test]
    fn test_line_patterns_are_anchored() {
        assert!(HEADER_LINE.is_match("@header Title"));
        assert!(!HEADER_LINE.is_match(" @header Title"));
        assert!(!HEADER_LINE.is_match("@header"));
        assert!(MARK_LINE.is_match("intro\n$mark Bold"));
        assert!(!URL_LINE.is_match("$url(a)[b] trailing"));
    }

    #[test]
    fn test_paren_span_rejects_nesting_and_tags() {
        assert!(PAREN_SPAN.is_match("(word)"));
        assert!(!PAREN_SPAN.is_match("(<b>x</b>)"));
        let found: Vec<&str> = PAREN_SPAN
            .find_iter("(a(b)c)")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["(b)"]);
    }
}
