//! # easymark-cli
//!
//! File and command-line wrappers around the `easymark` pipelines.
//!
//! The pipelines themselves never touch the file system. This crate reads
//! a source file, checks its extension, runs one conversion and writes the
//! result next to the input with the extension swapped:
//!
//! ```text
//! notes.em   ──-c───▶ notes.html
//! notes.em   ──-cmd─▶ notes.md
//! notes.html ──-dc──▶ notes.em
//! ```

pub mod cli;
mod files;
pub mod interactive;
mod operation;

use std::path::PathBuf;

pub use files::{convert_file, convert_file_with};
pub use operation::{output_path, Operation};

/// Error type for file conversions and argument handling
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("File must have .{expected} extension: {}", .path.display())]
    InvalidExtension { path: PathBuf, expected: &'static str },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing arguments: {0}")]
    Argument(String),

    #[error(transparent)]
    Conversion(#[from] easymark::EasyMarkError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
