//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// docsift CLI - Parse documents and analyze their text.
#[derive(Debug, Parser)]
#[command(name = "docsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCSIFT_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

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
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read, validate and parse a document
    Process(ProcessArgs),

    /// Analyze text for sentiment, entities and keywords
    Analyze(AnalyzeArgs),

    /// Process documents, then analyze their parsed content
    Run(RunArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Path to the document
    pub path: String,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub file: Option<String>,

    /// Read the text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Paths to the documents
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

/// Default log filter for a `-v` count
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_process_command() {
        let cli = Cli::parse_from(["docsift", "process", "notes.txt"]);
        match cli.command {
            Command::Process(args) => assert_eq!(args.path, "notes.txt"),
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_analyze_with_global_flags() {
        let cli = Cli::parse_from(["docsift", "analyze", "--file", "a.txt", "-f", "json", "-vv"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.file.as_deref(), Some("a.txt"));
                assert!(args.text.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_run_requires_path() {
        assert!(Cli::try_parse_from(["docsift", "run"]).is_err());
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["docsift", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected config init"),
        }
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "debug");
        assert_eq!(log_filter(5), "trace");
    }
}
