//! write-guard CLI tool.
//!
//! Usage:
//! ```bash
//! write-guard < request.json          # pre-write hook (default)
//! write-guard check [OPTIONS] <FILE>
//! write-guard list-rules
//! ```
//!
//! Only exit codes 0 (allow) and 2 (block) are ever returned. Failures of
//! the tool itself, including bad command lines, print to stderr and allow.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod gate;
mod report;

use gate::Verdict;

/// Pre-write pattern linter for editing agents
#[derive(Parser)]
#[command(name = "write-guard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "WRITE_GUARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a hook request from stdin and allow or block the write (default)
    Hook,

    /// Check a file on disk as if it were a proposed write
    Check {
        /// File whose content is checked
        file: PathBuf,

        /// Classify the content as if it were written to this path
        #[arg(long = "as-path")]
        as_path: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available rules
    ListRules,
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The block report shown to editing agents.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land here too; neither may block a write.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(verdict) => verdict.exit_code(),
        Err(e) => {
            eprintln!("write-guard error (allowing operation): {e:#}");
            ExitCode::SUCCESS
        }
    }
}

fn run(cli: Cli) -> Result<Verdict> {
    let config = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Hook) {
        Commands::Hook => Ok(commands::hook::run(config)),
        Commands::Check {
            file,
            as_path,
            format,
        } => commands::check::run(&file, as_path.as_deref(), format, config),
        Commands::ListRules => {
            commands::list_rules::run(config, &mut std::io::stdout().lock())?;
            Ok(Verdict::Allow)
        }
    }
}
