//! Policy loading and exit-code mapping.

use crate::cli::Cli;
use camino::Utf8Path;
use log::debug;
use pregen_guard::validate::{EXIT_FAILURE, validate_and_report};
use pregen_guard::{ConfigError, GuardConfig};
use std::io::Write;

/// Runs the hook for `cli`, writing diagnostics to `stdout`.
///
/// Returns the exit code the process should terminate with: `0` when
/// generation may proceed and `1` when it must abort.
#[must_use]
pub fn run(cli: &Cli, stdout: &mut dyn Write) -> i32 {
    match load_config(cli.config.as_deref()) {
        Ok(config) => validate_and_report(
            &cli.package_name,
            &cli.package_description,
            &config,
            stdout,
        ),
        Err(err) => {
            write_stdout_line(stdout, format!("ERROR: {}", config_error_message(&err)));
            EXIT_FAILURE
        }
    }
}

/// Loads the policy at `path`, or the default policy when no path is given.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the policy file cannot be read or parsed.
pub fn load_config(path: Option<&Utf8Path>) -> Result<GuardConfig, ConfigError> {
    path.map_or_else(
        || {
            debug!("no policy file given; using built-in rules");
            Ok(GuardConfig::default())
        },
        GuardConfig::load,
    )
}

fn config_error_message(err: &ConfigError) -> String {
    match err {
        ConfigError::Read { source, .. } => format!("{err}: {source}"),
        ConfigError::Parse { .. } => err.to_string(),
    }
}

fn write_stdout_line(stdout: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stdout, "{message}").is_err() {
        // Best-effort output; the exit code still reports the failure.
    }
}
