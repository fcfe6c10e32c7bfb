//! JSONL transcript of formatter output
//!
//! Each printed line is appended as one JSON object holding the level, the
//! uncolored message and a UTC timestamp. Command lines are recorded after
//! secret masking, so the transcript never holds more than the terminal did.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// Kind of line the formatter emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Section header
    Section,
    /// Subsection header
    Subsection,
    /// Step line
    Step,
    /// Informational bullet
    Info,
    /// Success mark
    Success,
    /// Error mark
    Error,
    /// Warning mark
    Warning,
    /// Echoed command
    Command,
}

/// One transcript line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// When the line was printed
    pub timestamp: DateTime<Utc>,
    /// Kind of line
    pub level: Level,
    /// Message text without glyphs or color escapes
    pub message: String,
}

impl TranscriptEntry {
    /// Entry stamped with the current time
    #[must_use]
    pub fn now(level: Level, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
        }
    }
}

/// Append-only JSONL file of [`TranscriptEntry`] values
#[derive(Debug, Clone)]
pub struct Transcript {
    path: PathBuf,
}

impl Transcript {
    /// Transcript at `path`, creating parent directories as needed.
    ///
    /// # Arguments
    /// * `path` - JSONL file to append to (created on first append)
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create transcript directory: {}", parent.display())
            })?;
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Append one entry
    ///
    /// # Errors
    /// Returns an error if:
    /// - The transcript cannot be opened or created
    /// - The entry cannot be serialized to JSON
    /// - Writing to the file fails
    pub fn append(&self, entry: &TranscriptEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open transcript: {}", self.path.display()))?;

        let json = serde_json::to_string(entry).context("Failed to serialize transcript entry")?;
        writeln!(file, "{json}").context("Failed to write to transcript")?;

        Ok(())
    }

    /// Read every entry in file order. A missing file yields no entries.
    pub fn read_all(&self) -> Result<Vec<TranscriptEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read transcript: {}", self.path.display()))?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_num, line)| {
                serde_json::from_str::<TranscriptEntry>(line)
                    .with_context(|| format!("Failed to parse transcript line {}", line_num + 1))
            })
            .collect()
    }

    /// Path of the transcript file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
