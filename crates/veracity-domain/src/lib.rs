//! Veracity Domain Layer
//!
//! This crate contains the core types and decision logic for Veracity.
//! It has ZERO external dependencies and defines the value objects, probe
//! outcomes and trait interfaces that all other crates depend upon.
//!
//! ## Key Concepts
//!
//! - **ProvenanceRecord**: The flattened view of a C2PA-style manifest
//! - **ProvenanceOutcome**: Closed result of the provenance probe (no manifest, manifest, failure)
//! - **MetadataOutcome**: Closed result of the capture-metadata probe (absent, present)
//! - **Probability**: Heuristic AI-generated score derived from both outcomes
//! - **Analysis**: The combined report for a single image
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure decision logic only
//! - Probe implementations (external tool, EXIF library) live in `veracity-probe`
//! - Trait definitions for every external interaction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod outcome;
pub mod probability;
pub mod provenance;
pub mod traits;

// Re-exports for convenience
pub use analysis::{analyze, Analysis};
pub use outcome::{CaptureMetadata, MetadataOutcome, ProbeFailure, ProvenanceOutcome};
pub use probability::{ai_probability, authentic_percentage, AuthenticityBand};
pub use provenance::{is_ai_generated, ProvenanceRecord, SoftwareAgent, AI_SOURCE_TYPE_TEXT, UNKNOWN};
pub use traits::{MetadataProbe, ProvenanceProbe};
