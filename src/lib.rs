//! deployfmt - Homebrew-style output for deployment scripts
//!
//! Colored section, step and status printers, secret masking for echoed
//! commands, and repository-relative path display. Printing never fails,
//! so output can't be the reason a deployment aborts.
//!
//! The free functions below print through a fresh standard-output
//! [`Formatter`] with production settings. Build a [`Formatter`] directly
//! to inject the environment, delay, masking strategy or transcript.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod delay;
pub mod env;
pub mod log;
pub mod mask;
pub mod output;
pub mod paths;

#[cfg(test)]
mod testutil;

use std::path::Path;

// Re-export commonly used types
pub use config::FormatterConfig;
pub use delay::{Delay, NoDelay, ThreadSleep, WARNING_DELAY};
pub use env::{EnvReader, MapEnv, ProcessEnv};
pub use log::{Level, Transcript, TranscriptEntry};
pub use mask::{DeploySecrets, SecretMasker, SecretSource, SubstringMasker};
pub use output::{format_account, ColorMode, Formatter, Style};
pub use paths::RootProbe;

/// Print a main section header (blue, bold)
pub fn print_section(title: &str) {
    Formatter::stdout().print_section(title);
}

/// Print a subsection header (cyan, bold)
pub fn print_subsection(title: &str) {
    Formatter::stdout().print_subsection(title);
}

/// Print a step message (bold)
pub fn print_step(message: &str) {
    Formatter::stdout().print_step(message);
}

/// Print an info message (plain)
pub fn print_info(message: &str) {
    Formatter::stdout().print_info(message);
}

/// Print a success message (green check mark)
pub fn print_success(message: &str) {
    Formatter::stdout().print_success(message);
}

/// Print an error message (red cross)
pub fn print_error(message: &str) {
    Formatter::stdout().print_error(message);
}

/// Print a warning message (yellow), after a one second pause
pub fn print_warning(message: &str) {
    Formatter::stdout().print_warning(message);
}

/// Print a command with secrets masked; returns the printed line
pub fn print_command<S: AsRef<str>>(
    cmd: &[S],
    secrets: Option<&dyn SecretSource>,
    script_path: Option<&Path>,
    root: Option<&Path>,
) -> String {
    Formatter::stdout().print_command(cmd, secrets, script_path, root)
}

/// Format `path` relative to `root`, or to the git repository root
#[must_use]
pub fn format_path(path: impl AsRef<Path>, root: Option<&Path>) -> String {
    Formatter::stdout().format_path(path, root)
}
