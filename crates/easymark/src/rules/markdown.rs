//! EasyMark to Markdown rules.
//!
//! List lines (`- item`) are already valid Markdown and pass through as is.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Rule, Rules, Scope};
use crate::utilities::{
    fenced, AMP_SPAN, CODE_LINE, HEADER_LINE, MARK_LINE, SMALL_LINE, URL_LINE,
};

/// Same span as the HTML bold rule. The optional groups pick up a `[label]`
/// opening the line and the end of the line, so a whole `[L](U)` link line
/// can be recognised.
static STRONG_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(^\[[^\]\n]*\])?\(([^()<>]+)\)([ \t]*$)?").unwrap());

/// Create the EasyMark to Markdown rules, in application order
pub fn markdown_rules() -> Rules {
    vec![
        heading_rule(),
        mark_rule(),
        link_rule(),
        small_heading_rule(),
        code_block_rule(),
        strong_rule(),
        emphasis_rule(),
    ]
    .into_iter()
    .collect()
}

fn heading_rule() -> Rule {
    Rule::new("header", Scope::Line, HEADER_LINE.clone(), |caps, _| {
        format!("# {}", &caps[1])
    })
}

fn mark_rule() -> Rule {
    Rule::new("mark", Scope::Line, MARK_LINE.clone(), |caps, _| {
        format!("**{}**", &caps[1])
    })
}

fn link_rule() -> Rule {
    Rule::new("url", Scope::Line, URL_LINE.clone(), |caps, _| {
        format!("[{}]({})", &caps[2], &caps[1])
    })
}

fn small_heading_rule() -> Rule {
    Rule::new("small", Scope::Line, SMALL_LINE.clone(), |caps, _| {
        format!("###### {}", &caps[1])
    })
}

fn code_block_rule() -> Rule {
    Rule::new("code", Scope::Line, CODE_LINE.clone(), |caps, options| {
        fenced(&options.fence, &caps[1])
    })
}

// No markup guard here, unlike the HTML rule. Only a line that is exactly
// `[L](U)`, as the link rule writes it, keeps its parentheses.
fn strong_rule() -> Rule {
    Rule::new("inline_bold", Scope::Text, STRONG_SPAN.clone(), |caps, _| {
        let label = caps.get(1).map_or("", |m| m.as_str());
        let line_end = caps.get(3).map_or("", |m| m.as_str());
        if caps.get(1).is_some() && caps.get(3).is_some() {
            return caps[0].to_string();
        }
        format!("{label}**{}**{line_end}", &caps[2])
    })
}

fn emphasis_rule() -> Rule {
    Rule::new("inline_italic", Scope::Text, AMP_SPAN.clone(), |caps, _| {
        format!("*{}*", &caps[1])
    })
}
