//! deployfmt - Homebrew-style output for deployment scripts
//!
//! CLI entry point so shell-based deploy scripts can use the printers.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use deployfmt::config::DEFAULT_CONFIG_FILE;
use deployfmt::{DeploySecrets, Formatter, FormatterConfig, ProcessEnv, SecretSource};

/// Homebrew-style output for deployment scripts
///
/// Prints colored section, step and status lines, echoes commands with
/// secrets masked, and shortens accounts and paths for display.
#[derive(Parser, Debug)]
#[command(name = "deployfmt", version, about)]
struct Cli {
    /// Path to the deployfmt.toml configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Main section header
    Section { message: String },
    /// Subsection header
    Subsection { message: String },
    /// Step line
    Step { message: String },
    /// Informational bullet
    Info { message: String },
    /// Success line
    Success { message: String },
    /// Error line
    Error { message: String },
    /// Warning line (pauses for one second first)
    Warning { message: String },
    /// Echo a command with secrets from `PRIVATE_KEY`, `RPC_URL` and `ETHERSCAN_API_KEY` masked
    Command {
        /// Absolute script path to display relative to --root
        #[arg(long)]
        script: Option<PathBuf>,
        /// Root directory for the script path
        #[arg(long)]
        root: Option<PathBuf>,
        /// Echo the command without masking secrets
        #[arg(long)]
        no_mask: bool,
        /// Command tokens, after `--`
        #[arg(last = true, required = true)]
        args: Vec<String>,
    },
    /// Shorten an account address
    Account { address: String },
    /// Display a path relative to the repository root
    Path {
        path: PathBuf,
        /// Root directory (defaults to the git top level)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

/// Run one subcommand. Returns the value to print for `account` and `path`.
fn execute<W: Write>(command: &Commands, fmt: &mut Formatter<W>) -> Option<String> {
    match command {
        Commands::Section { message } => fmt.print_section(message),
        Commands::Subsection { message } => fmt.print_subsection(message),
        Commands::Step { message } => fmt.print_step(message),
        Commands::Info { message } => fmt.print_info(message),
        Commands::Success { message } => fmt.print_success(message),
        Commands::Error { message } => fmt.print_error(message),
        Commands::Warning { message } => fmt.print_warning(message),
        Commands::Command {
            script,
            root,
            no_mask,
            args,
        } => {
            let secrets = DeploySecrets::from_env(&ProcessEnv);
            let secrets: Option<&dyn SecretSource> =
                if *no_mask { None } else { Some(&secrets) };
            fmt.print_command(args, secrets, script.as_deref(), root.as_deref());
        }
        Commands::Account { address } => return Some(fmt.format_account(address)),
        Commands::Path { path, root } => return Some(fmt.format_path(path, root.as_deref())),
    }
    None
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FormatterConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from '{}'", cli.config.display()))?;
    let mut fmt = Formatter::from_config(&config, std::io::stdout())
        .context("Failed to initialize formatter")?;

    if let Some(value) = execute(&cli.command, &mut fmt) {
        println!("{value}");
    }

    Ok(())
}
