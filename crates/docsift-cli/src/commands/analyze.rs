//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docsift_analyzer::AiAnalyzer;
use std::fs;
use std::io::{self, Read};

/// Execute the analyze command.
///
/// Returns whether the analysis completed.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let text = read_input(&args, io::stdin())?;

    let mut analyzer = AiAnalyzer::new(config.analyzer.clone())?;
    let outcome = analyzer.analyze_text(&text);

    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(outcome.is_success())
}

/// Read the text to analyze from exactly one of the argument, a file or `stdin`.
fn read_input(args: &AnalyzeArgs, mut stdin: impl Read) -> Result<String> {
    let sources = [args.text.is_some(), args.file.is_some(), args.stdin];
    match sources.iter().filter(|given| **given).count() {
        0 => {
            return Err(CliError::InvalidInput(
                "Must specify TEXT, --file or --stdin".to_string(),
            ))
        }
        1 => {}
        _ => {
            return Err(CliError::InvalidInput(
                "Specify only one of TEXT, --file or --stdin".to_string(),
            ))
        }
    }

    if let Some(text) = &args.text {
        Ok(text.clone())
    } else if let Some(path) = &args.file {
        Ok(fs::read_to_string(path)?)
    } else {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
