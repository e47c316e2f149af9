//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations that spawn processes or parse containers live in other crates.

use crate::outcome::{MetadataOutcome, ProvenanceOutcome};
use std::future::Future;

/// Reads a provenance manifest from raw image bytes
///
/// Implemented by the infrastructure layer (veracity-probe)
pub trait ProvenanceProbe {
    /// Check the image for a provenance manifest and an AI attribution.
    ///
    /// Never fails: every failure mode is a [`ProvenanceOutcome::Failed`].
    /// Dropping the returned future abandons the check and releases whatever
    /// it holds.
    fn check_provenance(
        &self,
        bytes: &[u8],
        mime_type: &str,
    ) -> impl Future<Output = ProvenanceOutcome> + Send;
}

/// Reads capture metadata from raw image bytes
///
/// Implemented by the infrastructure layer (veracity-probe)
pub trait MetadataProbe {
    /// Check the image for capture metadata
    fn read_metadata(&self, bytes: &[u8]) -> MetadataOutcome;
}
