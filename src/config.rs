//! Formatter configuration
//!
//! Parses `deployfmt.toml`. Every field has a default, so an empty file
//! (or no file) gives the stock Homebrew-style output.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::env::DEFAULT_CI_VARS;
use crate::output::style::ColorMode;

/// Default config file name looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "deployfmt.toml";

/// Terminal output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// When to emit color escapes (default: always)
    #[serde(default)]
    pub color: ColorMode,
    /// Environment variables that mark a CI run (flush after each line)
    #[serde(default = "default_ci_env_vars")]
    pub ci_env_vars: Vec<String>,
    /// Optional JSONL transcript of everything printed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            ci_env_vars: default_ci_env_vars(),
            transcript: None,
        }
    }
}

fn default_ci_env_vars() -> Vec<String> {
    DEFAULT_CI_VARS.iter().map(|v| (*v).to_string()).collect()
}

/// Path display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Fixed repository root; skips the git probe when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Program used for `rev-parse --show-toplevel`
    #[serde(default = "default_git_program")]
    pub git_program: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: None,
            git_program: default_git_program(),
        }
    }
}

fn default_git_program() -> String {
    "git".to_string()
}

/// Top-level configuration parsed from `deployfmt.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Terminal output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Path display settings
    #[serde(default)]
    pub paths: PathsConfig,
}

impl FormatterConfig {
    /// Parse a config file from a path
    ///
    /// # Arguments
    /// * `path` - Location of `deployfmt.toml`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not valid TOML or fails validation
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Like [`Self::from_path`], but a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse deployfmt.toml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for var in &self.output.ci_env_vars {
            if var.trim().is_empty() {
                bail!("CI environment variable name cannot be empty");
            }
        }

        if self.paths.git_program.trim().is_empty() {
            bail!("git_program cannot be empty");
        }

        Ok(())
    }
}
