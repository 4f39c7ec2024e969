//! Agendex CLI - extract agenda sessions and speaker profiles from program text.

use agendex_cli::commands;
use agendex_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> agendex_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;

    // `config init` must work even when the existing file is broken
    let config = match &cli.command {
        Command::Config(_) => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Agenda(args) => commands::execute_agenda(args, &config, &formatter),
        Command::Speakers(args) => commands::execute_speakers(args, &config, &formatter),
        Command::Config(args) => commands::execute_config(args, &config_path, &formatter),
    }
}

/// Log to stderr; `AGENDEX_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("AGENDEX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
