//! Probe outcomes
//!
//! Every way a probe can end is a variant here. Probes never return an error
//! to their caller; failures travel inside the outcome.

use crate::provenance::ProvenanceRecord;
use std::fmt;

/// Why the provenance probe could not produce a verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The declared mime type has no known file extension
    UnsupportedMimeType(String),

    /// No provenance tool for this platform, or the binary is missing
    ToolUnavailable(String),

    /// The tool exited with an error other than "no claim"
    ToolFailed(String),

    /// The tool reported success but its output was not JSON
    Undecodable,

    /// Writing the scratch file or spawning the tool failed
    Io(String),
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::UnsupportedMimeType(mime) => {
                write!(f, "Unsupported file type: {}", mime)
            }
            ProbeFailure::ToolUnavailable(reason) => {
                write!(f, "Unsupported platform or missing binary: {}", reason)
            }
            ProbeFailure::ToolFailed(stderr) => {
                write!(f, "Error checking C2PA from binary: {}", stderr)
            }
            ProbeFailure::Undecodable => {
                write!(f, "The image has C2PA metadata, but it cannot be decoded")
            }
            ProbeFailure::Io(message) => write!(f, "Error running C2PA check: {}", message),
        }
    }
}

/// Result of the provenance probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvenanceOutcome {
    /// The tool found no claim in the file; not an error
    NoManifest,

    /// A manifest was read and flattened
    Manifest {
        /// The extracted record
        record: ProvenanceRecord,
        /// Whether the record attributes the asset to an AI tool
        generated: bool,
    },

    /// The probe could not run or its output was unusable
    Failed(ProbeFailure),
}

impl ProvenanceOutcome {
    /// AI-generation verdict. Distinct from "a manifest exists".
    pub fn is_generated(&self) -> bool {
        matches!(self, ProvenanceOutcome::Manifest { generated: true, .. })
    }

    /// The extracted record, if a manifest was read
    pub fn record(&self) -> Option<&ProvenanceRecord> {
        match self {
            ProvenanceOutcome::Manifest { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Human-readable error text, if the probe failed
    pub fn error(&self) -> Option<String> {
        match self {
            ProvenanceOutcome::Failed(failure) => Some(failure.to_string()),
            _ => None,
        }
    }
}

/// Capture metadata read from the image container
///
/// Each field is independently optional; absent fields are skipped when
/// rendered, never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureMetadata {
    /// EXIF version (e.g., "2.32")
    pub exif_version: Option<String>,
    /// Camera manufacturer
    pub make: Option<String>,
    /// Camera model
    pub model: Option<String>,
    /// Software that last wrote the file
    pub software: Option<String>,
    /// Original capture timestamp
    pub datetime_original: Option<String>,
    /// GPS latitude as rendered by the metadata library
    pub gps_latitude: Option<String>,
    /// GPS longitude as rendered by the metadata library
    pub gps_longitude: Option<String>,
    /// Total number of fields present in the container
    pub field_count: usize,
}

impl CaptureMetadata {
    /// Labelled fields that are present, in display order
    pub fn labelled_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("EXIF Version", &self.exif_version),
            ("Camera Make", &self.make),
            ("Camera Model", &self.model),
            ("Software", &self.software),
            ("Date/Time Original", &self.datetime_original),
            ("GPS Latitude", &self.gps_latitude),
            ("GPS Longitude", &self.gps_longitude),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// Result of the capture-metadata probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOutcome {
    /// No recognizable metadata, or the bytes could not be parsed
    Absent,
    /// Metadata was found
    Present(CaptureMetadata),
}

impl MetadataOutcome {
    /// Whether metadata was found
    pub fn is_present(&self) -> bool {
        matches!(self, MetadataOutcome::Present(_))
    }

    /// The metadata, if present
    pub fn metadata(&self) -> Option<&CaptureMetadata> {
        match self {
            MetadataOutcome::Present(metadata) => Some(metadata),
            MetadataOutcome::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_manifest_has_neither_record_nor_error() {
        let outcome = ProvenanceOutcome::NoManifest;
        assert!(!outcome.is_generated());
        assert!(outcome.record().is_none());
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_manifest_exposes_record_without_error() {
        let outcome = ProvenanceOutcome::Manifest {
            record: ProvenanceRecord::unknown(),
            generated: false,
        };
        assert!(!outcome.is_generated());
        assert!(outcome.record().is_some());
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_failure_exposes_error_without_record() {
        let outcome = ProvenanceOutcome::Failed(ProbeFailure::Undecodable);
        assert!(!outcome.is_generated());
        assert!(outcome.record().is_none());
        assert_eq!(
            outcome.error().as_deref(),
            Some("The image has C2PA metadata, but it cannot be decoded")
        );
    }

    #[test]
    fn test_tool_failure_carries_stderr() {
        let failure = ProbeFailure::ToolFailed("Error: unsupported format".to_string());
        assert_eq!(
            failure.to_string(),
            "Error checking C2PA from binary: Error: unsupported format"
        );
    }

    #[test]
    fn test_labelled_fields_skip_absent_values() {
        let metadata = CaptureMetadata {
            make: Some("Canon".to_string()),
            gps_latitude: Some("51 deg 30 min 0 sec N".to_string()),
            field_count: 2,
            ..CaptureMetadata::default()
        };
        assert_eq!(
            metadata.labelled_fields(),
            vec![
                ("Camera Make", "Canon"),
                ("GPS Latitude", "51 deg 30 min 0 sec N")
            ]
        );
    }

    #[test]
    fn test_metadata_outcome_presence() {
        assert!(!MetadataOutcome::Absent.is_present());
        assert!(MetadataOutcome::Present(CaptureMetadata::default()).is_present());
        assert!(MetadataOutcome::Absent.metadata().is_none());
    }
}
