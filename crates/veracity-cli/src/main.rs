//! Veracity CLI - Estimate whether an image was AI-generated.

use clap::Parser;
use veracity_cli::commands;
use veracity_cli::{init_tracing, Cli, Command, Config, Formatter};
use veracity_probe::{Analyzer, ToolLocation};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> veracity_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing();

    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let location = ToolLocation::resolve(&config.tool_config(cli.tool));

    match cli.command {
        Command::Check(args) => {
            commands::execute_check(args, Analyzer::new(location), &formatter).await?;
        }
        Command::Tool => {
            commands::execute_tool(&location, &formatter)?;
        }
    }

    Ok(())
}
