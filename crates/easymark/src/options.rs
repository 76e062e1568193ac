//! Configuration options and document formats

use std::fmt;

/// Document formats known to the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// EasyMark source (`.em`)
    EasyMark,
    /// HTML (`.html`)
    Html,
    /// Markdown (`.md`), write-only
    Markdown,
}

impl Format {
    /// File extension for this format, without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            Format::EasyMark => "em",
            Format::Html => "html",
            Format::Markdown => "md",
        }
    }

    /// Look up a format by file extension (case-sensitive, no leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "em" => Some(Format::EasyMark),
            "html" => Some(Format::Html),
            "md" => Some(Format::Markdown),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::EasyMark => "EasyMark",
            Format::Html => "HTML",
            Format::Markdown => "Markdown",
        };
        f.write_str(name)
    }
}

/// Options for EasyMarkService
#[derive(Debug, Clone)]
pub struct Options {
    /// Wrap HTML output in `<html><body>...</body></html>`
    pub wrap_document: bool,

    /// Fence string for Markdown code blocks
    pub fence: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wrap_document: true,
            fence: "```".to_string(),
        }
    }
}
