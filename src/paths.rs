//! Repository root discovery and path relativization

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// External command that reports the repository top-level directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootProbe {
    program: String,
    args: Vec<String>,
}

impl Default for RootProbe {
    fn default() -> Self {
        Self::git("git")
    }
}

impl RootProbe {
    /// `<program> rev-parse --show-toplevel`
    #[must_use]
    pub fn git(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: vec!["rev-parse".to_string(), "--show-toplevel".to_string()],
        }
    }

    /// Arbitrary program and arguments whose trimmed stdout is the root
    #[must_use]
    pub fn command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Run the probe, returning `None` on spawn failure, non-zero exit or
    /// empty output.
    #[must_use]
    pub fn run(&self) -> Option<PathBuf> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let root = stdout.trim();
        if root.is_empty() {
            None
        } else {
            Some(PathBuf::from(root))
        }
    }

    /// Probe result, falling back to the current working directory.
    #[must_use]
    pub fn resolve(&self) -> PathBuf {
        self.run().unwrap_or_else(current_dir)
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Render `path` relative to `root` when it lies under it, otherwise as given.
///
/// Purely lexical: nothing is canonicalized, so `..` segments and symlinks
/// are compared as written.
#[must_use]
pub fn relativize(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
