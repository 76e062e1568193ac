//! EasyMark to HTML rules.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Rule, Rules, Scope};
use crate::utilities::{
    contains_markup, AMP_SPAN, CODE_LINE, HEADER_LINE, LIST_LINE, MARK_LINE, PAREN_SPAN,
    SMALL_LINE, URL_LINE,
};

/// A maximal run of `<li>...</li>` items, each optionally followed by a newline
static LIST_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"((?:<li>.*?</li>\n?)+)").unwrap());

/// Create the EasyMark to HTML rules, in application order.
///
/// The result is the document body; wrapping it in the `<html><body>`
/// shell is left to the caller.
pub fn html_rules() -> Rules {
    vec![
        header_rule(),
        mark_rule(),
        url_rule(),
        small_rule(),
        code_rule(),
        list_item_rule(),
        list_rule(),
        inline_bold_rule(),
        inline_italic_rule(),
    ]
    .into_iter()
    .collect()
}

fn header_rule() -> Rule {
    Rule::new("header", Scope::Line, HEADER_LINE.clone(), |caps, _| {
        format!("<h1>{}</h1>", &caps[1])
    })
}

fn mark_rule() -> Rule {
    Rule::new("mark", Scope::Line, MARK_LINE.clone(), |caps, _| {
        format!("<b>{}</b>", &caps[1])
    })
}

fn url_rule() -> Rule {
    Rule::new("url", Scope::Line, URL_LINE.clone(), |caps, _| {
        format!(r#"<a href="{}">{}</a>"#, &caps[1], &caps[2])
    })
}

fn small_rule() -> Rule {
    Rule::new("small", Scope::Line, SMALL_LINE.clone(), |caps, _| {
        format!("<h6>{}</h6>", &caps[1])
    })
}

fn code_rule() -> Rule {
    Rule::new("code", Scope::Line, CODE_LINE.clone(), |caps, _| {
        format!("<code>{}</code>", &caps[1])
    })
}

fn list_item_rule() -> Rule {
    Rule::new("list_item", Scope::Line, LIST_LINE.clone(), |caps, _| {
        format!("<li>{}</li>", &caps[1])
    })
}

fn list_rule() -> Rule {
    Rule::new("list", Scope::Text, LIST_RUN.clone(), |caps, _| {
        format!("<ul>{}</ul>", &caps[1])
    })
}

/// `(content)` becomes bold unless the content already carries a tag
fn inline_bold_rule() -> Rule {
    Rule::new("inline_bold", Scope::Text, PAREN_SPAN.clone(), |caps, _| {
        let content = &caps[1];
        if contains_markup(content) {
            return caps[0].to_string();
        }
        format!("<b>{}</b>", content)
    })
}

fn inline_italic_rule() -> Rule {
    Rule::new("inline_italic", Scope::Text, AMP_SPAN.clone(), |caps, _| {
        format!("<i>{}</i>", &caps[1])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn convert(text: &str) -> String {
        html_rules().apply(text, &Options::default())
    }

    #[test]
    fn test_rule_order() {
        let rules = html_rules();
        let names: Vec<&str> = rules.names().collect();
        assert_eq!(
            names,
            vec![
                "header",
                "mark",
                "url",
                "small",
                "code",
                "list_item",
                "list",
                "inline_bold",
                "inline_italic"
            ]
        );
    }

    #[test]
    fn test_line_markers() {
        assert_eq!(convert("@header Title"), "<h1>Title</h1>");
        assert_eq!(convert("$mark Bold line"), "<b>Bold line</b>");
        assert_eq!(
            convert("$url(http://x.com)[Link]"),
            r#"<a href="http://x.com">Link</a>"#
        );
        assert_eq!(convert("@small Fine print"), "<h6>Fine print</h6>");
        assert_eq!(convert("$cb let x = 1;"), "<code>let x = 1;</code>");
    }

    #[test]
    fn test_marker_needs_line_start_and_space() {
        assert_eq!(convert(" @header Title"), " @header Title");
        assert_eq!(convert("@headerTitle"), "@headerTitle");
        assert_eq!(convert("see @header Title"), "see @header Title");
    }

    #[test]
    fn test_url_must_fill_line() {
        // Not a link line, so the parenthesized URL is treated as inline bold
        assert_eq!(
            convert("$url(a.com)[A] more"),
            "$url<b>a.com</b>[A] more"
        );
    }

    #[test]
    fn test_consecutive_list_items_share_one_block() {
        assert_eq!(
            convert("- a\n- b\n- c"),
            "<ul><li>a</li>\n<li>b</li>\n<li>c</li></ul>"
        );
    }

    #[test]
    fn test_separated_list_items_get_separate_blocks() {
        assert_eq!(
            convert("- a\ntext\n- b"),
            "<ul><li>a</li>\n</ul>text\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_list_item_keeps_inline_formatting() {
        assert_eq!(
            convert("- (bold) and &it&"),
            "<ul><li><b>bold</b> and <i>it</i></li></ul>"
        );
    }

    #[test]
    fn test_inline_bold_skips_nested_parentheses() {
        assert_eq!(convert("(a(b)c)"), "(a<b>b</b>c)");
        assert_eq!(convert("x (word) y"), "x <b>word</b> y");
    }

    #[test]
    fn test_italic_inside_bold() {
        assert_eq!(convert("(very &much&)"), "<b>very <i>much</i></b>");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "Just words.\nAnother line, nothing else.";
        assert_eq!(convert(text), text);
    }
}
