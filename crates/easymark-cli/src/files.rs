//! Whole-file conversion.

use std::fs;
use std::path::{Path, PathBuf};

use easymark::EasyMarkService;
use tracing::{debug, info};

use crate::operation::{output_path, Operation};
use crate::{ConvertError, Result};

/// Convert a file with the default service, returning the written path
pub fn convert_file(path: &Path, operation: Operation) -> Result<PathBuf> {
    convert_file_with(&EasyMarkService::new(), path, operation)
}

/// Convert a file with the given service.
///
/// The extension is checked before anything is read, and nothing is
/// written unless the conversion succeeded.
pub fn convert_file_with(
    service: &EasyMarkService,
    path: &Path,
    operation: Operation,
) -> Result<PathBuf> {
    if !operation.accepts(path) {
        return Err(ConvertError::InvalidExtension {
            path: path.to_path_buf(),
            expected: operation.source_extension(),
        });
    }
    if !path.exists() {
        return Err(ConvertError::FileNotFound(path.to_path_buf()));
    }

    let source = fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read source");

    let converted = service.convert(
        &source,
        operation.source_format(),
        operation.target_format(),
    )?;

    let target = output_path(path, operation);
    fs::write(&target, converted).map_err(|source| ConvertError::Io {
        path: target.clone(),
        source,
    })?;
    info!(from = %path.display(), to = %target.display(), "converted");

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_convert_em_to_html() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("doc.em");
        fs::write(&source, "@header Hi\n(there)").unwrap();

        let target = convert_file(&source, Operation::EmToHtml).unwrap();
        assert_eq!(target, dir.path().join("doc.html"));
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "<html><body><h1>Hi</h1>\n<b>there</b></body></html>"
        );
    }

    #[test]
    fn test_convert_em_to_markdown() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("doc.em");
        fs::write(&source, "$mark Loud").unwrap();

        let target = convert_file(&source, Operation::EmToMarkdown).unwrap();
        assert_eq!(fs::read_to_string(target).unwrap(), "**Loud**");
    }

    #[test]
    fn test_convert_html_to_em() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("page.html");
        fs::write(&source, "<html><body><h6>small</h6></body></html>").unwrap();

        let target = convert_file(&source, Operation::HtmlToEm).unwrap();
        assert_eq!(target, dir.path().join("page.em"));
        assert_eq!(fs::read_to_string(target).unwrap(), "@small small");
    }

    #[test]
    fn test_wrong_extension_is_rejected_before_reading() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("notes.txt");
        fs::write(&source, "@header x").unwrap();

        let err = convert_file(&source, Operation::EmToHtml).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidExtension { expected: "em", .. }));
        assert!(!dir.path().join("notes.html").exists());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("missing.em");

        let err = convert_file(&source, Operation::EmToHtml).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound(_)));
        assert!(!dir.path().join("missing.html").exists());
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let dir = tempdir().unwrap();
        // A directory exists but cannot be read as a file
        let source = dir.path().join("folder.em");
        fs::create_dir(&source).unwrap();

        let err = convert_file(&source, Operation::EmToHtml).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
        assert!(!dir.path().join("folder.html").exists());
    }
}
