//! Environment access
//!
//! The formatter never reads the process environment directly. It goes
//! through an [`EnvReader`], so CI detection and secret lookup can be
//! driven from an in-memory map in tests or embedding hosts.

use std::collections::HashMap;

/// Variables whose presence marks a continuous-integration run
pub const DEFAULT_CI_VARS: [&str; 2] = ["CI", "GITHUB_ACTIONS"];

/// Read-only view of environment variables
pub trait EnvReader {
    /// Value of `name`, or `None` if unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;

    /// Whether `name` is set to a non-empty value.
    fn is_set(&self, name: &str) -> bool {
        self.var(name).is_some_and(|v| !v.is_empty())
    }
}

/// Reads the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvReader for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// True if any of `ci_vars` is set to a non-empty value.
pub fn is_ci<S: AsRef<str>>(env: &dyn EnvReader, ci_vars: &[S]) -> bool {
    ci_vars.iter().any(|name| env.is_set(name.as_ref()))
}
