//! # easymark
//!
//! Convert EasyMark documents to HTML and Markdown, and HTML back to EasyMark.
//!
//! EasyMark is a small line-oriented markup language:
//!
//! | EasyMark            | HTML                     | Markdown          |
//! |---------------------|--------------------------|-------------------|
//! | `@header Title`     | `<h1>Title</h1>`         | `# Title`         |
//! | `@small Note`       | `<h6>Note</h6>`          | `###### Note`     |
//! | `$mark Bold line`   | `<b>Bold line</b>`       | `**Bold line**`   |
//! | `$url(U)[L]`        | `<a href="U">L</a>`      | `[L](U)`          |
//! | `$cb code`          | `<code>code</code>`      | fenced block      |
//! | `- item`            | `<ul><li>item</li></ul>` | `- item`          |
//! | `(text)`            | `<b>text</b>`            | `**text**`        |
//! | `&text&`            | `<i>text</i>`            | `*text*`          |
//!
//! ## Design
//!
//! There is no parser and no AST. Each conversion is an ordered list of
//! regex rewrite [`Rule`]s folded over the whole document. The order of the
//! rules is part of the contract: list items are wrapped after the line
//! rules but before inline formatting, and the reverse pipeline recovers
//! block tags before bold and italic.
//!
//! ## Example
//!
//! ```rust
//! let html = easymark::to_html("@header Hello\n$mark World");
//! assert_eq!(html, "<html><body><h1>Hello</h1>\n<b>World</b></body></html>");
//!
//! let em = easymark::to_easymark(&html);
//! assert_eq!(em, "@header Hello\n$mark World");
//! ```

mod options;
mod rules;
mod service;
mod utilities;

pub use options::{Format, Options};
pub use rules::{html_rules, markdown_rules, reverse_rules, ReplacementFn, Rule, Rules, Scope};
pub use service::{to_easymark, to_html, to_html_body, to_markdown, EasyMarkService};
pub use utilities::{contains_markup, wrap_document};

/// Error type for easymark operations
#[derive(Debug, thiserror::Error)]
pub enum EasyMarkError {
    #[error("Invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unsupported conversion: {from} to {to}")]
    UnsupportedConversion { from: Format, to: Format },
}

pub type Result<T> = std::result::Result<T, EasyMarkError>;
