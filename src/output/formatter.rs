//! Homebrew-style status printer
//!
//! One [`Formatter`] writes every line of a deploy run. Formatting never
//! fails: write errors, probe failures and transcript errors all degrade
//! silently so output can never abort the deployment that produced it.

use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::style::{ColorMode, Style};
use crate::config::FormatterConfig;
use crate::delay::{Delay, ThreadSleep, WARNING_DELAY};
use crate::env::{is_ci, EnvReader, ProcessEnv, DEFAULT_CI_VARS};
use crate::log::{Level, Transcript, TranscriptEntry};
use crate::mask::{SecretMasker, SecretSource, SubstringMasker};
use crate::paths::{relativize, RootProbe};

/// Characters kept from each end of a shortened account
const ACCOUNT_EDGE: usize = 7;

/// Status printer bound to an output sink
pub struct Formatter<W: Write = Stdout> {
    out: W,
    env: Box<dyn EnvReader>,
    delay: Box<dyn Delay>,
    masker: Box<dyn SecretMasker>,
    probe: RootProbe,
    root: Option<PathBuf>,
    ci_vars: Vec<String>,
    color: ColorMode,
    transcript: Option<Transcript>,
}

impl Formatter<Stdout> {
    /// Formatter on standard output with production capabilities
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Formatter<W> {
    /// Formatter writing to `out`, reading the process environment,
    /// sleeping before warnings and probing git for the repository root.
    ///
    /// Colors are always emitted, whether or not `out` is a terminal.
    pub fn new(out: W) -> Self {
        Self {
            out,
            env: Box::new(ProcessEnv),
            delay: Box::new(ThreadSleep),
            masker: Box::new(SubstringMasker),
            probe: RootProbe::default(),
            root: None,
            ci_vars: DEFAULT_CI_VARS.iter().map(|v| (*v).to_string()).collect(),
            color: ColorMode::default(),
            transcript: None,
        }
    }

    /// Formatter configured from a `deployfmt.toml`.
    ///
    /// The color mode is kept on this formatter only; other formatters in
    /// the process are unaffected.
    ///
    /// # Arguments
    /// * `config` - Parsed configuration
    /// * `out` - Output sink for printed lines
    ///
    /// # Errors
    /// Returns an error if the transcript directory cannot be created
    pub fn from_config(config: &FormatterConfig, out: W) -> Result<Self> {
        let transcript = config
            .output
            .transcript
            .as_ref()
            .map(Transcript::new)
            .transpose()?;

        Ok(Self {
            probe: RootProbe::git(&config.paths.git_program),
            root: config.paths.root.clone(),
            ci_vars: config.output.ci_env_vars.clone(),
            color: config.output.color,
            transcript,
            ..Self::new(out)
        })
    }

    /// Replace the environment reader
    #[must_use]
    pub fn with_env(mut self, env: impl EnvReader + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Replace the warning delay strategy
    #[must_use]
    pub fn with_delay(mut self, delay: impl Delay + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    /// Replace the secret masking strategy
    #[must_use]
    pub fn with_masker(mut self, masker: impl SecretMasker + 'static) -> Self {
        self.masker = Box::new(masker);
        self
    }

    /// Choose when escapes are emitted
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Replace the repository root probe
    #[must_use]
    pub fn with_probe(mut self, probe: RootProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Use a fixed default root instead of probing
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Mirror every printed line into `transcript`
    #[must_use]
    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = Some(transcript);
        self
    }

    /// Borrow the output sink
    pub const fn sink(&self) -> &W {
        &self.out
    }

    /// Consume the formatter, returning the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// `==> title` in bold blue
    pub fn print_section(&mut self, title: &str) {
        let line = self.paint(Style::Section, &format!("==> {title}"));
        self.emit(Level::Section, title, &line);
    }

    /// ` ==> title` in bold cyan
    pub fn print_subsection(&mut self, title: &str) {
        let line = self.paint(Style::Subsection, &format!(" ==> {title}"));
        self.emit(Level::Subsection, title, &line);
    }

    /// `  → message` in bold
    pub fn print_step(&mut self, message: &str) {
        let line = self.paint(Style::Step, &format!("  → {message}"));
        self.emit(Level::Step, message, &line);
    }

    /// `    • message`, uncolored
    pub fn print_info(&mut self, message: &str) {
        let line = format!("    • {message}");
        self.emit(Level::Info, message, &line);
    }

    /// Green check mark line
    pub fn print_success(&mut self, message: &str) {
        let line = format!("    {}", self.paint(Style::Success, &format!("✓ {message} ")));
        self.emit(Level::Success, message, &line);
    }

    /// Red cross line
    pub fn print_error(&mut self, message: &str) {
        let line = format!("    {}", self.paint(Style::Error, &format!("✗ {message} ")));
        self.emit(Level::Error, message, &line);
    }

    /// Yellow warning line, printed after [`WARNING_DELAY`].
    ///
    /// The delay runs through the configured [`Delay`], which blocks the
    /// calling thread in production.
    pub fn print_warning(&mut self, message: &str) {
        self.delay.wait(WARNING_DELAY);
        let line = format!("    {}", self.paint(Style::Warning, &format!("⚠ {message} ")));
        self.emit(Level::Warning, message, &line);
    }

    /// Display `path` relative to `root`, or to the repository root when
    /// `root` is `None`.
    ///
    /// Without an explicit root the fixed root from [`Self::with_root`] is
    /// used, then the git probe, then the current working directory. Paths
    /// outside the root come back unchanged.
    pub fn format_path(&self, path: impl AsRef<Path>, root: Option<&Path>) -> String {
        let path = path.as_ref();
        match root.or(self.root.as_deref()) {
            Some(root) => relativize(path, root),
            None => relativize(path, &self.probe.resolve()),
        }
    }

    /// Echo a command line with secrets masked and the script path shown
    /// relative to `root`.
    ///
    /// Tokens are joined with single spaces. The script path is only
    /// rewritten when both `script_path` and `root` are given. Returns the
    /// line as printed, without the two-space indent.
    pub fn print_command<S: AsRef<str>>(
        &mut self,
        cmd: &[S],
        secrets: Option<&dyn SecretSource>,
        script_path: Option<&Path>,
        root: Option<&Path>,
    ) -> String {
        let mut line = cmd
            .iter()
            .map(AsRef::<str>::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        if let Some(secrets) = secrets {
            line = self.masker.mask(&line, secrets);
        }

        if let (Some(script), Some(root)) = (script_path, root) {
            let absolute = script.to_string_lossy();
            if !absolute.is_empty() {
                let relative = relativize(script, root);
                line = line.replace(absolute.as_ref(), &relative);
            }
        }

        self.emit(Level::Command, &line, &format!("  {line}"));
        line
    }

    /// Shorten an account like [`format_account`], colored per this
    /// formatter's mode.
    #[must_use]
    pub fn format_account(&self, account: &str) -> String {
        self.paint(Style::Account, &shorten_account(account))
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style.paint(text, self.color.enabled())
    }

    fn emit(&mut self, level: Level, message: &str, line: &str) {
        let _ = writeln!(self.out, "{line}");

        if let Some(transcript) = &self.transcript {
            let _ = transcript.append(&TranscriptEntry::now(level, message));
        }

        if is_ci(&*self.env, &self.ci_vars) {
            let _ = self.out.flush();
            let _ = io::stderr().flush();
        }
    }
}

/// Shorten an account to its first and last seven characters, in cyan.
///
/// Accounts too short to shorten (fewer than fourteen characters) are
/// colored whole.
#[must_use]
pub fn format_account(account: &str) -> String {
    Style::Account.paint(&shorten_account(account), true)
}

fn shorten_account(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    if chars.len() < ACCOUNT_EDGE * 2 {
        return account.to_string();
    }

    let head: String = chars[..ACCOUNT_EDGE].iter().collect();
    let tail: String = chars[chars.len() - ACCOUNT_EDGE..].iter().collect();
    format!("{head}...{tail}")
}
