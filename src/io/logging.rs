//! Logger setup for the command-line tool

use crate::io::error::Result;
use flexi_logger::{Logger, LoggerHandle};

/// Log level spec for a verbosity setting
///
/// Quiet mode only reports errors; each `-v` raises the level one step
/// from the default of warnings.
pub const fn level_spec(quiet: bool, verbosity: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start logging to stderr
///
/// `RUST_LOG` takes precedence over the verbosity-derived level. The
/// returned handle must be kept alive for as long as logging is needed.
///
/// # Errors
///
/// Returns an error if the level spec is invalid or a logger is already installed
pub fn init(quiet: bool, verbosity: u8) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level_spec(quiet, verbosity))?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
