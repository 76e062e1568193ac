//! Interactive prompt used when `eminterp` runs without arguments.
//!
//! Asks for an EasyMark file, converts it to HTML and reports one status
//! line per request, until end of input or `quit`.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

use easymark::EasyMarkService;

use crate::files::convert_file_with;
use crate::operation::Operation;
use crate::ConvertError;

const PROMPT: &str = "Select EasyMark file: ";

/// Outcome of one conversion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    NoFileSelected,
    UnsupportedFileType,
    FileNotFound,
    Converted { from: String, to: String },
    Failed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NoFileSelected => f.write_str("File Error: No File Selected"),
            Status::UnsupportedFileType => f.write_str("Error reading file: Unsupported FileType"),
            Status::FileNotFound => f.write_str("Reading Error: File Not Found"),
            Status::Converted { from, to } => write!(f, "Successfully converted {from} → {to}"),
            Status::Failed(message) => write!(f, "Conversion failed: {message}"),
        }
    }
}

/// Convert one file name typed by the user
pub fn convert_request(service: &EasyMarkService, filename: &str) -> Status {
    let filename = filename.trim();
    if filename.is_empty() {
        return Status::NoFileSelected;
    }
    let path = Path::new(filename);
    match convert_file_with(service, path, Operation::EmToHtml) {
        Ok(target) => Status::Converted {
            from: base_name(path),
            to: base_name(&target),
        },
        Err(ConvertError::InvalidExtension { .. }) => Status::UnsupportedFileType,
        Err(ConvertError::FileNotFound(_)) => Status::FileNotFound,
        Err(e) => Status::Failed(e.to_string()),
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run the prompt loop over any reader and writer
pub fn run<R: BufRead, W: Write>(
    service: &EasyMarkService,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "EasyMark Converter")?;
    writeln!(out, "Convert .em files to HTML")?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        writeln!(out, "{}", convert_request(service, &line))?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
