//! `laporan` command-line entry point.
//!
//! # Responsibility
//! - Read pasted report text from a file or stdin.
//! - Wire parser, binder and render-context output together.
//!
//! # Invariants
//! - Parsing never aborts a run; only I/O and config failures exit non-zero.

mod commands;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use laporan_core::{default_log_level, init_logging, ReportConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "laporan")]
#[command(version)]
#[command(about = "Turn pasted work-group reports into structured report data")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted)
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a report and print its groups and period
    Parse {
        /// Report text file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Parse a report, attach archive images per group and write the render context
    Build {
        /// Report text file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Archive for one group, as `GROUP NAME=path/to/archive.zip`
        #[arg(short, long = "archive")]
        archives: Vec<String>,

        /// Directory searched for `<Group_Name>.zip` when no explicit archive is given
        #[arg(long)]
        archive_dir: Option<PathBuf>,

        /// Render-context JSON path (derived from the report period when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    let level = cli
        .log_level
        .clone()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = cli.log_dir.clone().or_else(|| config.log_dir.clone());
    init_logging(&level, log_dir.as_deref()).map_err(|err| anyhow!(err))?;

    match cli.command {
        Commands::Parse { input, format } => {
            let raw = commands::read_report(input.as_deref())?;
            let output = match format {
                OutputFormat::Text => commands::render_text(&raw),
                OutputFormat::Json => commands::render_json(&raw, &config)?,
            };
            println!("{output}");
        }

        Commands::Build {
            input,
            archives,
            archive_dir,
            output,
        } => {
            let raw = commands::read_report(input.as_deref())?;
            let mapping = commands::parse_archive_mapping(&archives)?;
            let written = commands::build(&raw, &config, &mapping, archive_dir.as_deref(), output)?;
            println!("Render context written to: {}", written.display());
        }
    }

    Ok(())
}
