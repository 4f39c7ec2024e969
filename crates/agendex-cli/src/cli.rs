//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Agendex - Extract agenda sessions and speaker profiles from conference program text.
#[derive(Debug, Parser)]
#[command(name = "agendex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "AGENDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (titles or names only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract agenda sessions from program text
    Agenda(AgendaArgs),

    /// Extract speaker profiles from program text
    Speakers(SpeakersArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Where to read program text from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Plain-text program file ("-" reads stdin)
    pub file: Option<PathBuf>,

    /// Read program text from stdin
    #[arg(long, conflicts_with = "file")]
    pub stdin: bool,
}

/// Arguments for the agenda command.
#[derive(Debug, Args)]
pub struct AgendaArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON array of known speakers: [{"id": "...", "name": "..."}]
    #[arg(short, long)]
    pub speakers: Option<PathBuf>,

    /// Date used when the text never states one (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the speakers command.
#[derive(Debug, Args)]
pub struct SpeakersArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the config command.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,
}
