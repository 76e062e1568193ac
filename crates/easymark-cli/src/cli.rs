//! Argument parsing and dispatch for `eminterp`.
//!
//! The tool takes single-dash long flags (`-cmd`, `-dc`, `-info`, `-help`).
//! clap only knows single-character short flags, so those are rewritten to
//! their double-dash form before parsing.

use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use tracing::{debug, warn};

use crate::files::convert_file;
use crate::operation::Operation;
use crate::{ConvertError, Result};

const BIN_NAME: &str = "eminterp";

/// Flags written with a single dash that clap expects with two
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["-cmd", "-dc", "-info", "-help"];

pub const INFO_TEXT: &str = "Command line-based interpreter protocol for EasyMark.

Compatible versions: v1.1.0+";

pub const HELP_TEXT: &str = "EasyMark Interpreter (eminterp) - Command Line Interface

Usage: eminterp [OPTION] [FILENAME]

Options:
  -c FILENAME      Convert .em file to .html
  -cmd FILENAME    Convert .em file to .md (Markdown)
  -dc FILENAME     Convert .html file back to .em
  -info            Show version information
  -help            Show this help message

Examples:
  eminterp -c document.em
  eminterp -cmd document.em
  eminterp -dc document.html";

/// What a command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments at all
    Interactive,
    Help,
    Info,
    Convert { operation: Operation, path: PathBuf },
}

/// Build the clap command
pub fn command() -> Command {
    Command::new(BIN_NAME)
        .about("EasyMark Interpreter - Command line converter")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("convert")
                .short('c')
                .long("convert")
                .value_name("FILENAME")
                .help("Convert .em file to .html"),
        )
        .arg(
            Arg::new("cmd")
                .long("cmd")
                .value_name("FILENAME")
                .help("Convert .em file to .md (Markdown)"),
        )
        .arg(
            Arg::new("deconvert")
                .long("dc")
                .alias("deconvert")
                .value_name("FILENAME")
                .help("Convert .html file back to .em"),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .action(ArgAction::SetTrue)
                .help("Show version information"),
        )
        .arg(
            Arg::new("help")
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Show this help message"),
        )
        .group(
            ArgGroup::new("command")
                .args(["convert", "cmd", "deconvert", "info", "help"])
                .required(true)
                .multiple(false),
        )
}

/// Rewrite single-dash long flags to the double-dash form clap understands
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if SINGLE_DASH_LONG_FLAGS.contains(&arg.as_str()) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

/// Parse the arguments that follow the program name
pub fn parse<I, S>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args = normalize_args(args);
    if args.is_empty() {
        return Ok(Invocation::Interactive);
    }
    debug!(?args, "parsing arguments");

    let matches = command()
        .try_get_matches_from(std::iter::once(BIN_NAME.to_string()).chain(args))
        .map_err(|e| ConvertError::Argument(first_line(&e.to_string())))?;
    Ok(invocation_from(&matches))
}

fn invocation_from(matches: &ArgMatches) -> Invocation {
    if matches.get_flag("help") {
        return Invocation::Help;
    }
    if matches.get_flag("info") {
        return Invocation::Info;
    }
    let operations = [
        ("convert", Operation::EmToHtml),
        ("cmd", Operation::EmToMarkdown),
        ("deconvert", Operation::HtmlToEm),
    ];
    for (id, operation) in operations {
        if let Some(path) = matches.get_one::<String>(id) {
            return Invocation::Convert {
                operation,
                path: PathBuf::from(path),
            };
        }
    }
    // The required group guarantees one of the above matched
    Invocation::Help
}

fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Run a non-interactive invocation, writing user-facing output to `out`.
///
/// Once a conversion has written its output file, failing to print the
/// success line no longer fails the command.
pub fn execute<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
    let written = match invocation {
        Invocation::Help => writeln!(out, "{HELP_TEXT}"),
        Invocation::Info => writeln!(out, "{INFO_TEXT}"),
        Invocation::Convert { operation, path } => {
            let target = convert_file(path, *operation)?;
            if let Err(e) = writeln!(
                out,
                "Successfully converted {} → {}",
                path.display(),
                target.display()
            ) {
                warn!(to = %target.display(), error = %e, "could not report conversion");
            }
            Ok(())
        }
        Invocation::Interactive => Ok(()),
    };
    written.map_err(|source| ConvertError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}
