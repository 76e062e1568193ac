//! Conversion operations and output naming.

use std::path::{Path, PathBuf};

use easymark::Format;

/// One of the three conversions the tool performs on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `.em` to `.html`
    EmToHtml,
    /// `.em` to `.md`
    EmToMarkdown,
    /// `.html` to `.em`
    HtmlToEm,
}

impl Operation {
    pub fn source_format(self) -> Format {
        match self {
            Operation::EmToHtml | Operation::EmToMarkdown => Format::EasyMark,
            Operation::HtmlToEm => Format::Html,
        }
    }

    pub fn target_format(self) -> Format {
        match self {
            Operation::EmToHtml => Format::Html,
            Operation::EmToMarkdown => Format::Markdown,
            Operation::HtmlToEm => Format::EasyMark,
        }
    }

    /// Extension the input file must carry
    pub fn source_extension(self) -> &'static str {
        self.source_format().extension()
    }

    /// Check the input path ends in `.{source_extension}` (case-sensitive)
    pub fn accepts(self, path: &Path) -> bool {
        path.to_string_lossy()
            .ends_with(&format!(".{}", self.source_extension()))
    }
}

/// Output path for a conversion: the last dot-delimited segment of the
/// file name is replaced by the target extension. A file name without a
/// dot gets the extension appended.
pub fn output_path(path: &Path, operation: Operation) -> PathBuf {
    let extension = operation.target_format().extension();
    let Some(name) = path.file_name() else {
        return path.with_extension(extension);
    };
    let name = name.to_string_lossy();
    let stem = match name.rfind('.') {
        Some(index) => &name[..index],
        None => &name[..],
    };
    path.with_file_name(format!("{stem}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(Operation::EmToHtml.source_format(), Format::EasyMark);
        assert_eq!(Operation::EmToMarkdown.target_format(), Format::Markdown);
        assert_eq!(Operation::HtmlToEm.source_extension(), "html");
    }

    #[test]
    fn test_accepts() {
        assert!(Operation::EmToHtml.accepts(Path::new("notes.em")));
        assert!(Operation::EmToMarkdown.accepts(Path::new("dir/notes.em")));
        assert!(!Operation::EmToHtml.accepts(Path::new("notes.txt")));
        assert!(!Operation::EmToHtml.accepts(Path::new("notes.EM")));
        assert!(!Operation::EmToHtml.accepts(Path::new("notes.html")));
        assert!(Operation::HtmlToEm.accepts(Path::new("page.html")));
        assert!(!Operation::HtmlToEm.accepts(Path::new("page.htm")));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("notes.em"), Operation::EmToHtml),
            PathBuf::from("notes.html")
        );
        assert_eq!(
            output_path(Path::new("notes.em"), Operation::EmToMarkdown),
            PathBuf::from("notes.md")
        );
        assert_eq!(
            output_path(Path::new("docs/page.html"), Operation::HtmlToEm),
            PathBuf::from("docs/page.em")
        );
    }

    #[test]
    fn test_output_path_replaces_only_last_segment() {
        assert_eq!(
            output_path(Path::new("archive.v2.em"), Operation::EmToHtml),
            PathBuf::from("archive.v2.html")
        );
        assert_eq!(
            output_path(Path::new("v1.0/readme.em"), Operation::EmToMarkdown),
            PathBuf::from("v1.0/readme.md")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(
            output_path(Path::new("README"), Operation::EmToHtml),
            PathBuf::from("README.html")
        );
    }
}
