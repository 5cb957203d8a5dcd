//! docsift Gateway server
//!
//! Starts the HTTP server for document processing and analysis.

use docsift_gateway::{config::GatewayConfig, start_server, GatewayError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), GatewayError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        GatewayConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using local defaults");
        eprintln!("Usage: docsift-gateway --config <path-to-config.toml>");
        eprintln!();
        GatewayConfig::default_local_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("docsift Gateway - Document processing and analysis over HTTP");
    println!();
    println!("USAGE:");
    println!("    docsift-gateway --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ROUTES:");
    println!("    POST /process            {{\"document_path\": \"...\"}}");
    println!("    POST /analyze            {{\"document_data\": {{\"content\": \"...\"}}}}");
    println!("    POST /invoke/process     same event, {{statusCode, body}} reply");
    println!("    POST /invoke/analyze     same event, {{statusCode, body}} reply");
    println!("    GET  /history/documents");
    println!("    GET  /history/analyses");
    println!("    GET  /health");
    println!();
    println!("CONFIGURATION:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8080)");
    println!("    - history_capacity: Entries kept per history log (default: 100, 0 disables)");
    println!("    - [processor]: encoding, page_size_lines, max_document_bytes, extensions");
    println!("    - [analyzer]: word lists and keyword limits");
    println!();
}
