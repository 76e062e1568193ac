//! HTML to EasyMark rules.
//!
//! A best-effort inverse of [`html_rules`](super::html_rules). Only HTML
//! produced by the forward pipeline is expected to come back unchanged;
//! anything else is rewritten as far as the patterns reach.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Rule, Rules, Scope};

static SHELL_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<html>.*?<body>").unwrap());
static SHELL_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</body>.*?</html>").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h1>(.+?)</h1>").unwrap());
static H6: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h6>(.+?)</h6>").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<code>(.+?)</code>").unwrap());
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<a href="([^"]+?)">(.+?)</a>"#).unwrap());
static LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<ul>(.*?)</ul>").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<li>(.+?)</li>").unwrap());
static BOLD_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mi)^<b>(.+?)</b>$").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<b>(.+?)</b>").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<i>(.+?)</i>").unwrap());

/// Create the HTML to EasyMark rules, in application order.
///
/// Block tags go first. The list rule changes line structure, so it runs
/// before `<b>` lines are told apart from inline bold.
pub fn reverse_rules() -> Rules {
    vec![
        strip_rule("shell_open", &SHELL_OPEN),
        strip_rule("shell_close", &SHELL_CLOSE),
        header_rule(),
        small_rule(),
        code_rule(),
        link_rule(),
        list_rule(),
        mark_rule(),
        inline_bold_rule(),
        inline_italic_rule(),
    ]
    .into_iter()
    .collect()
}

fn strip_rule(name: &str, pattern: &Regex) -> Rule {
    Rule::new(name, Scope::Text, pattern.clone(), |_, _| String::new())
}

fn header_rule() -> Rule {
    Rule::new("header", Scope::Text, H1.clone(), |caps, _| {
        format!("@header {}", &caps[1])
    })
}

fn small_rule() -> Rule {
    Rule::new("small", Scope::Text, H6.clone(), |caps, _| {
        format!("@small {}", &caps[1])
    })
}

fn code_rule() -> Rule {
    Rule::new("code", Scope::Text, CODE.clone(), |caps, _| {
        format!("$cb {}", &caps[1])
    })
}

fn link_rule() -> Rule {
    Rule::new("url", Scope::Text, LINK.clone(), |caps, _| {
        format!("$url({})[{}]", &caps[1], &caps[2])
    })
}

/// Every `<li>` of a `<ul>` block becomes one `- item` line. The trailing
/// newline keeps whatever followed the block on its own line.
fn list_rule() -> Rule {
    Rule::new("list", Scope::Text, LIST.clone(), |caps, _| {
        let items: Vec<String> = LIST_ITEM
            .captures_iter(&caps[1])
            .map(|item| format!("- {}", item[1].trim()))
            .collect();
        format!("{}\n", items.join("\n"))
    })
}

fn mark_rule() -> Rule {
    Rule::new("mark", Scope::Line, BOLD_LINE.clone(), |caps, _| {
        format!("$mark {}", &caps[1])
    })
}

fn inline_bold_rule() -> Rule {
    Rule::new("inline_bold", Scope::Text, BOLD.clone(), |caps, _| {
        format!("({})", &caps[1])
    })
}

fn inline_italic_rule() -> Rule {
    Rule::new("inline_italic", Scope::Text, ITALIC.clone(), |caps, _| {
        format!("&{}&", &caps[1])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn convert(html: &str) -> String {
        reverse_rules()
            .apply(html, &Options::default())
            .trim()
            .to_string()
    }

    #[test]
    fn test_strips_document_shell() {
        assert_eq!(convert("<html><body>hello</body></html>"), "hello");
        assert_eq!(
            convert("<HTML>\n  <head></head>\n  <BODY>\nhello\n</Body>\n</html>\n"),
            "hello"
        );
    }

    #[test]
    fn test_block_tags() {
        assert_eq!(convert("<h1>Title</h1>"), "@header Title");
        assert_eq!(convert("<H6>Note</H6>"), "@small Note");
        assert_eq!(convert("<code>a\nb</code>"), "$cb a\nb");
        assert_eq!(
            convert(r#"<a href="http://x.com">Link</a>"#),
            "$url(http://x.com)[Link]"
        );
    }

    #[test]
    fn test_list_block() {
        assert_eq!(
            convert("<ul><li>a</li>\n<li> b </li>\n<li>c</li>\n</ul>after"),
            "- a\n- b\n- c\nafter"
        );
    }

    #[test]
    fn test_bold_line_versus_inline_bold() {
        assert_eq!(convert("<b>Whole line</b>"), "$mark Whole line");
        assert_eq!(convert("some <b>inline</b> text"), "some (inline) text");
        assert_eq!(
            convert("<b>line</b>\nand <b>span</b>"),
            "$mark line\nand (span)"
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(convert("<i>it</i> and <I>IT</I>"), "&it& and &IT&");
    }

    #[test]
    fn test_bold_inside_list_item_stays_inline() {
        assert_eq!(convert("<ul><li><b>x</b></li></ul>"), "- (x)");
    }
}
