//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Veracity CLI - Estimate whether an image was AI-generated.
#[derive(Debug, Parser)]
#[command(name = "veracity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VERACITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Provenance tool binary, overriding the bundled lookup
    #[arg(long, global = true, env = "VERACITY_TOOL")]
    pub tool: Option<PathBuf>,

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
    /// Quiet format (probability only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze an image file
    Check(CheckArgs),

    /// Show the resolved provenance tool and supported image types
    Tool,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Image file to analyze
    pub file: PathBuf,

    /// Mime type, when the file extension is missing or misleading
    #[arg(short, long)]
    pub mime: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_check_command() {
        let cli = Cli::parse_from(["veracity", "check", "photo.jpg"]);
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.file, PathBuf::from("photo.jpg"));
                assert!(args.mime.is_none());
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "veracity",
            "check",
            "upload.bin",
            "--mime",
            "image/png",
            "--format",
            "json",
            "--no-color",
        ]);
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Check(args) => assert_eq!(args.mime.as_deref(), Some("image/png")),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_tool_command() {
        let cli = Cli::parse_from(["veracity", "tool"]);
        assert!(matches!(cli.command, Command::Tool));
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["veracity"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, OutputFormat::Quiet));
    }
}
