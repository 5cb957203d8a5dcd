//! docsift CLI - Command-line interface for document processing and analysis.

use clap::Parser;
use docsift_cli::commands;
use docsift_cli::{cli::log_filter, Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> docsift_cli::Result<bool> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // RUST_LOG overrides the -v level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load config, falling back to defaults when the file is absent
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Process(args) => commands::execute_process(args, &config, &formatter),
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter),
        Command::Run(args) => commands::execute_run(args, &config, &formatter),
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
            Ok(true)
        }
    }
}
