//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use tracing::debug;
use veracity_probe::{mime, AnalysisReport, Analyzer};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Execute the check command.
///
/// Probe failures are part of the report, so only unreadable input is an
/// error here.
pub async fn execute_check(args: CheckArgs, analyzer: Analyzer, formatter: &Formatter) -> Result<()> {
    let report = analyze_file(&args, analyzer).await?;
    println!(
        "{}",
        formatter.format_report(&args.file.display().to_string(), &report)?
    );
    Ok(())
}

/// Read the file and run the analysis.
pub async fn analyze_file(args: &CheckArgs, analyzer: Analyzer) -> Result<AnalysisReport> {
    let mime_type = mime_type_for(args)?;
    debug!(
        "Checking {} as {} with provenance tool: {}",
        args.file.display(),
        mime_type,
        analyzer.tool_location()
    );

    let bytes = tokio::fs::read(&args.file)
        .await
        .map_err(|source| CliError::ReadFile {
            path: args.file.display().to_string(),
            source,
        })?;

    let analysis = analyzer.analyze(&bytes, &mime_type).await;

    Ok(AnalysisReport::from(&analysis))
}

/// Mime type from `--mime`, else the file extension.
fn mime_type_for(args: &CheckArgs) -> Result<String> {
    if let Some(mime_type) = &args.mime {
        if mime_type.trim().is_empty() {
            return Err(CliError::InvalidInput("--mime must not be empty".to_string()));
        }
        return Ok(mime_type.trim().to_string());
    }

    Ok(mime::mime_for_path(&args.file)
        .unwrap_or(FALLBACK_MIME_TYPE)
        .to_string())
}
