//! Parse provenance tool output into a record

use crate::error::ExtractorError;
use crate::manifest::extract_record;
use serde_json::Value;
use tracing::debug;
use veracity_domain::ProvenanceRecord;

/// Parse the tool's JSON dump and flatten it
pub fn parse_manifest(output: &str) -> Result<ProvenanceRecord, ExtractorError> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(ExtractorError::Empty);
    }

    let json: Value = serde_json::from_str(trimmed)?;
    let record = extract_record(&json);

    debug!(
        "Parsed manifest: generator '{}', {} software agent(s)",
        record.generator_name,
        record.software_agents.len()
    );

    Ok(record)
}
