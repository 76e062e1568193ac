//! EasyMarkService - the main entry point for document conversion.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::options::{Format, Options};
use crate::rules::{html_rules, markdown_rules, reverse_rules, Rules};
use crate::utilities::wrap_document;
use crate::{EasyMarkError, Result};

static DEFAULT_SERVICE: Lazy<EasyMarkService> = Lazy::new(EasyMarkService::new);

/// The main service for converting between EasyMark, HTML and Markdown
pub struct EasyMarkService {
    options: Options,
    html: Rules,
    markdown: Rules,
    easymark: Rules,
}

impl EasyMarkService {
    /// Create a new EasyMarkService with default options
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create an EasyMarkService with custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            html: html_rules(),
            markdown: markdown_rules(),
            easymark: reverse_rules(),
        }
    }

    /// Convert EasyMark to an HTML document
    pub fn to_html(&self, text: &str) -> String {
        let body = self.to_html_body(text);
        if self.options.wrap_document {
            wrap_document(&body)
        } else {
            body
        }
    }

    /// Convert EasyMark to an HTML fragment, without the document shell
    pub fn to_html_body(&self, text: &str) -> String {
        self.html.apply(text, &self.options)
    }

    /// Convert EasyMark to Markdown
    pub fn to_markdown(&self, text: &str) -> String {
        self.markdown.apply(text, &self.options)
    }

    /// Convert HTML back to EasyMark
    pub fn to_easymark(&self, html: &str) -> String {
        self.easymark.apply(html, &self.options).trim().to_string()
    }

    /// Convert a document between two formats.
    ///
    /// Supported: EasyMark to HTML, EasyMark to Markdown, HTML to EasyMark.
    pub fn convert(&self, text: &str, from: Format, to: Format) -> Result<String> {
        debug!(%from, %to, bytes = text.len(), "converting document");
        match (from, to) {
            (Format::EasyMark, Format::Html) => Ok(self.to_html(text)),
            (Format::EasyMark, Format::Markdown) => Ok(self.to_markdown(text)),
            (Format::Html, Format::EasyMark) => Ok(self.to_easymark(text)),
            _ => Err(EasyMarkError::UnsupportedConversion { from, to }),
        }
    }

    /// Rules producing the given target format
    pub fn rules(&self, target: Format) -> &Rules {
        match target {
            Format::Html => &self.html,
            Format::Markdown => &self.markdown,
            Format::EasyMark => &self.easymark,
        }
    }

    /// Mutable access to the rules producing the given target format
    pub fn rules_mut(&mut self, target: Format) -> &mut Rules {
        match target {
            Format::Html => &mut self.html,
            Format::Markdown => &mut self.markdown,
            Format::EasyMark => &mut self.easymark,
        }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Default for EasyMarkService {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert EasyMark to an HTML document with default options
pub fn to_html(text: &str) -> String {
    DEFAULT_SERVICE.to_html(text)
}

/// Convert EasyMark to an HTML fragment with default options
pub fn to_html_body(text: &str) -> String {
    DEFAULT_SERVICE.to_html_body(text)
}

/// Convert EasyMark to Markdown with default options
pub fn to_markdown(text: &str) -> String {
    DEFAULT_SERVICE.to_markdown(text)
}

/// Convert HTML back to EasyMark with default options
pub fn to_easymark(html: &str) -> String {
    DEFAULT_SERVICE.to_easymark(html)
}
