//! Serializable view of an analysis
//!
//! This is the JSON shape the HTTP service returns and the CLI prints. The
//! domain types stay free of serde; conversion happens here.

use serde::{Deserialize, Serialize};
use veracity_domain::{
    Analysis, CaptureMetadata, MetadataOutcome, ProvenanceOutcome, ProvenanceRecord, SoftwareAgent,
};

/// Full report for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Heuristic AI-generated probability (0-100)
    pub probability: u8,
    /// 100 minus the probability
    pub authentic_percentage: u8,
    /// Band name (likely_authentic, uncertain, likely_synthetic)
    pub band: String,
    /// One-sentence reading of the band
    pub summary: String,
    /// Provenance probe outcome
    pub provenance: ProvenanceReport,
    /// Capture-metadata probe outcome
    pub metadata: MetadataReport,
}

/// Provenance probe outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceReport {
    /// AI-generation verdict from the manifest
    pub present: bool,
    /// Whether a manifest was read at all
    pub manifest_found: bool,
    /// Flattened manifest, when one was read
    pub record: Option<RecordReport>,
    /// Human-readable failure, when the probe failed
    pub error: Option<String>,
}

/// Flattened manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordReport {
    /// Claim instance identifier
    pub instance_id: String,
    /// Asset title
    pub title: String,
    /// Certificate issuer
    pub issuer: String,
    /// Claim generator name
    pub generator_name: String,
    /// Digital source type, if recorded
    pub digital_source_type: Option<String>,
    /// Software agents in manifest order
    pub software_agents: Vec<AgentReport>,
}

/// One software agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    /// Agent name
    pub name: String,
    /// Action tag
    pub action: String,
    /// Sentence fragment describing the action
    pub description: String,
}

/// Capture-metadata probe outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataReport {
    /// Whether capture metadata was found
    pub present: bool,
    /// The fields that were found
    pub fields: Option<MetadataFields>,
}

/// Capture metadata fields; absent ones are omitted from the JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataFields {
    /// EXIF version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif_version: Option<String>,
    /// Camera manufacturer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Camera model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Software that last wrote the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    /// Original capture timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_original: Option<String>,
    /// GPS latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps_latitude: Option<String>,
    /// GPS longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps_longitude: Option<String>,
    /// Total number of fields in the container
    pub field_count: usize,
}

impl From<&Analysis> for AnalysisReport {
    fn from(analysis: &Analysis) -> Self {
        let band = analysis.band();
        Self {
            probability: analysis.probability,
            authentic_percentage: analysis.authentic_percentage(),
            band: band.as_str().to_string(),
            summary: band.summary().to_string(),
            provenance: ProvenanceReport::from(&analysis.provenance),
            metadata: MetadataReport::from(&analysis.metadata),
        }
    }
}

impl From<&ProvenanceOutcome> for ProvenanceReport {
    fn from(outcome: &ProvenanceOutcome) -> Self {
        Self {
            present: outcome.is_generated(),
            manifest_found: outcome.record().is_some(),
            record: outcome.record().map(RecordReport::from),
            error: outcome.error(),
        }
    }
}

impl From<&ProvenanceRecord> for RecordReport {
    fn from(record: &ProvenanceRecord) -> Self {
        Self {
            instance_id: record.instance_id.clone(),
            title: record.title.clone(),
            issuer: record.issuer.clone(),
            generator_name: record.generator_name.clone(),
            digital_source_type: record.digital_source_type.clone(),
            software_agents: record.software_agents.iter().map(AgentReport::from).collect(),
        }
    }
}

impl From<&SoftwareAgent> for AgentReport {
    fn from(agent: &SoftwareAgent) -> Self {
        Self {
            name: agent.name.clone(),
            action: agent.action.clone(),
            description: agent.describe_action(),
        }
    }
}

impl From<&MetadataOutcome> for MetadataReport {
    fn from(outcome: &MetadataOutcome) -> Self {
        Self {
            present: outcome.is_present(),
            fields: outcome.metadata().map(MetadataFields::from),
        }
    }
}

impl From<&CaptureMetadata> for MetadataFields {
    fn from(metadata: &CaptureMetadata) -> Self {
        Self {
            exif_version: metadata.exif_version.clone(),
            make: metadata.make.clone(),
            model: metadata.model.clone(),
            software: metadata.software.clone(),
            datetime_original: metadata.datetime_original.clone(),
            gps_latitude: metadata.gps_latitude.clone(),
            gps_longitude: metadata.gps_longitude.clone(),
            field_count: metadata.field_count,
        }
    }
}
