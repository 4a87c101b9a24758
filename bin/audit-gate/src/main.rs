//! Audit Gate CLI
//!
//! Checks performance-audit reports against assertions or budgets and
//! compares two reports audit by audit.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use audit_gate_core::commands::{
    display_version, execute_assert, execute_diff, validate_budgets_file, AssertArgs, DiffArgs,
};

/// Audit Gate - assertions and diffs for performance-audit reports
#[derive(Parser, Debug)]
#[command(name = "audit-gate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate assertions or budgets against one or more reports
    Assert {
        /// Report files or directories of report files
        #[arg(short, long, required = true, num_args = 1..)]
        reports: Vec<PathBuf>,

        /// Assertion configuration (JSON or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Budget file to assert instead of a configuration
        #[arg(short, long)]
        budgets: Option<PathBuf>,

        /// Path to write the results JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the terminal summary
        #[arg(long)]
        quiet: bool,
    },

    /// Compare two reports
    Diff {
        /// Base report JSON
        #[arg(long)]
        base: PathBuf,

        /// Compare report JSON
        #[arg(long)]
        compare: PathBuf,

        /// Only compare this audit id
        #[arg(long)]
        audit: Option<String>,

        /// Minimum numeric change in percent (e.g., 5.0)
        #[arg(long)]
        threshold: Option<f64>,

        /// Path to write the diff JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the terminal summary
        #[arg(long)]
        quiet: bool,
    },

    /// Validate a budget JSON file
    ValidateBudgets {
        /// Path to budget JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Assert {
            reports,
            config,
            budgets,
            output,
            quiet,
        } => {
            let args = AssertArgs {
                reports,
                config,
                budgets,
                output,
                summary: !quiet,
            };
            execute_assert(args)?;
        }

        Commands::Diff {
            base,
            compare,
            audit,
            threshold,
            output,
            quiet,
        } => {
            let args = DiffArgs {
                base,
                compare,
                audit,
                threshold_percent: threshold,
                summary: !quiet,
                output,
            };
            let report = execute_diff(args)?;
            log::debug!("{} diff(s) found", report.diffs.len());
        }

        Commands::ValidateBudgets { file } => {
            validate_budgets_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
