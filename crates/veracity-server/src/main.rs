//! Veracity Server CLI
//!
//! Starts the HTTP server for image analysis.

use std::env;
use std::process;
use tracing::warn;
use veracity_server::{config::ServerConfig, init_tracing, start_server, ServerError};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "--help" {
        print_help();
        return Ok(());
    }

    init_tracing();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else {
        warn!("No config file specified, using default configuration");
        warn!("Usage: veracity-server --config <path-to-config.toml>");
        ServerConfig::default_config()
    };

    start_server(config).await
}

fn print_help() {
    println!("Veracity Server - Image provenance and capture-metadata analysis");
    println!();
    println!("USAGE:");
    println!("    veracity-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8080)");
    println!("    - max_upload_bytes: Largest accepted upload (default: 20 MiB)");
    println!("    - [provenance_tool]: resources_dir, version, or an explicit path");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /analyze      multipart upload, field 'file'");
    println!("    GET  /health       service and provenance tool status");
    println!();
}
