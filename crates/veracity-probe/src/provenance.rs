//! Provenance probe backed by the external `c2patool` binary

use crate::mime::extension_for;
use crate::tool::ToolLocation;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::{debug, warn};
use veracity_domain::{is_ai_generated, ProbeFailure, ProvenanceOutcome, ProvenanceProbe};
use veracity_extractor::parse_manifest;

/// What the tool prints when a file carries no manifest
const NO_CLAIM_MESSAGES: [&str; 2] = ["Error: No claim found", "No claim found"];

/// Runs `<binary> -d <file>` on a scratch copy of the image
#[derive(Debug, Clone)]
pub struct C2paToolProbe {
    location: ToolLocation,
}

impl C2paToolProbe {
    /// Create a probe for a resolved tool location
    pub fn new(location: ToolLocation) -> Self {
        Self { location }
    }

    /// The tool location this probe runs
    pub fn location(&self) -> &ToolLocation {
        &self.location
    }
}

impl ProvenanceProbe for C2paToolProbe {
    async fn check_provenance(&self, bytes: &[u8], mime_type: &str) -> ProvenanceOutcome {
        let binary = match &self.location {
            ToolLocation::Available(path) => path,
            ToolLocation::Unavailable(reason) => {
                return ProvenanceOutcome::Failed(ProbeFailure::ToolUnavailable(reason.clone()));
            }
        };

        let Some(extension) = extension_for(mime_type) else {
            return ProvenanceOutcome::Failed(ProbeFailure::UnsupportedMimeType(
                mime_type.to_string(),
            ));
        };

        match run_tool(binary, bytes, extension).await {
            Ok(output) => classify_output(
                output.status.success(),
                &String::from_utf8_lossy(&output.stdout),
                &String::from_utf8_lossy(&output.stderr),
            ),
            Err(e) => {
                warn!("Failed to run provenance tool {}: {}", binary.display(), e);
                ProvenanceOutcome::Failed(ProbeFailure::Io(e.to_string()))
            }
        }
    }
}

/// Write the bytes to a scratch file and run the tool against it
///
/// The scratch file is removed when this future completes or is dropped,
/// whether the write, the spawn, or the tool itself failed. Dropping the
/// future also kills the tool.
async fn run_tool(binary: &Path, bytes: &[u8], extension: &str) -> io::Result<Output> {
    let mut scratch = tempfile::Builder::new()
        .prefix("veracity-")
        .suffix(extension)
        .tempfile()?;
    scratch.write_all(bytes)?;
    scratch.flush()?;

    // Close our handle but keep the path alive until the tool exits
    let scratch = scratch.into_temp_path();
    debug!("Running {} -d {}", binary.display(), scratch.display());

    Command::new(binary)
        .arg("-d")
        .arg(&*scratch)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
}

/// Turn the tool's exit status and output into an outcome
pub fn classify_output(success: bool, stdout: &str, stderr: &str) -> ProvenanceOutcome {
    let stderr = stderr.trim();

    if !success {
        if NO_CLAIM_MESSAGES.contains(&stderr) {
            debug!("No provenance manifest found");
            return ProvenanceOutcome::NoManifest;
        }
        warn!("Provenance tool failed: {}", stderr);
        return ProvenanceOutcome::Failed(ProbeFailure::ToolFailed(stderr.to_string()));
    }

    match parse_manifest(stdout) {
        Ok(record) => {
            let generated = is_ai_generated(&record);
            ProvenanceOutcome::Manifest { record, generated }
        }
        Err(e) => {
            warn!("Provenance tool output could not be decoded: {}", e);
            ProvenanceOutcome::Failed(ProbeFailure::Undecodable)
        }
    }
}
