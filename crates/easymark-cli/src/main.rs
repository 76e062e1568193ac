//! `eminterp` - convert EasyMark files to HTML or Markdown and back.
//!
//! Usage:
//!   eminterp -c FILE     - `.em` to `.html`
//!   eminterp -cmd FILE   - `.em` to `.md`
//!   eminterp -dc FILE    - `.html` to `.em`
//!   eminterp -info       - show version information
//!   eminterp -help       - show usage
//!   eminterp             - interactive prompt
//!
//! Exit status is 0 on success, 1 on any failure and 130 when interrupted
//! with Ctrl+C.

use std::io;
use std::process::{self, ExitCode};

use easymark::EasyMarkService;
use easymark_cli::cli::{self, Invocation};
use easymark_cli::interactive;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Exit status after an interrupt
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> ExitCode {
    init_tracing();

    if let Err(e) = ctrlc::set_handler(|| process::exit(EXIT_INTERRUPTED)) {
        warn!(error = %e, "could not install interrupt handler");
    }

    let invocation = match cli::parse(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Use -help to see available options.");
            return ExitCode::FAILURE;
        }
    };

    if invocation == Invocation::Interactive {
        let service = EasyMarkService::new();
        let stdin = io::stdin();
        return match interactive::run(&service, stdin.lock(), &mut io::stdout()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match cli::execute(&invocation, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `EASYMARK_LOG` or `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("EASYMARK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
