//! Combined analysis of a single image

use crate::outcome::{MetadataOutcome, ProvenanceOutcome};
use crate::probability::{ai_probability, authentic_percentage, AuthenticityBand};
use crate::traits::{MetadataProbe, ProvenanceProbe};

/// Report for one analyzed image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Provenance probe outcome
    pub provenance: ProvenanceOutcome,

    /// Capture-metadata probe outcome
    pub metadata: MetadataOutcome,

    /// Heuristic AI-generated probability (0-100)
    pub probability: u8,
}

impl Analysis {
    /// Score both outcomes and assemble the report
    pub fn from_outcomes(provenance: ProvenanceOutcome, metadata: MetadataOutcome) -> Self {
        let probability = ai_probability(provenance.is_generated(), metadata.is_present());
        Self {
            provenance,
            metadata,
            probability,
        }
    }

    /// Coarse band for the probability
    pub fn band(&self) -> AuthenticityBand {
        AuthenticityBand::from_probability(self.probability)
    }

    /// Complement of the probability
    pub fn authentic_percentage(&self) -> u8 {
        authentic_percentage(self.probability)
    }
}

/// Run both probes in sequence and score the result
///
/// A failed provenance probe does not stop the metadata probe or the
/// scoring step.
pub async fn analyze<P, M>(
    provenance_probe: &P,
    metadata_probe: &M,
    bytes: &[u8],
    mime_type: &str,
) -> Analysis
where
    P: ProvenanceProbe + ?Sized,
    M: MetadataProbe + ?Sized,
{
    let provenance = provenance_probe.check_provenance(bytes, mime_type).await;
    let metadata = metadata_probe.read_metadata(bytes);
    Analysis::from_outcomes(provenance, metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{CaptureMetadata, ProbeFailure};
    use crate::provenance::{is_ai_generated, ProvenanceRecord};
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    struct FixedProvenance(ProvenanceOutcome);

    impl ProvenanceProbe for FixedProvenance {
        async fn check_provenance(&self, _bytes: &[u8], _mime_type: &str) -> ProvenanceOutcome {
            self.0.clone()
        }
    }

    /// Drive a future whose probes never wait on anything
    fn run_ready<F: Future>(future: F) -> F::Output {
        let mut future = pin!(future);
        match future.as_mut().poll(&mut Context::from_waker(Waker::noop())) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("fixed probes complete on first poll"),
        }
    }

    struct FixedMetadata(MetadataOutcome);

    impl MetadataProbe for FixedMetadata {
        fn read_metadata(&self, _bytes: &[u8]) -> MetadataOutcome {
            self.0.clone()
        }
    }

    fn camera_metadata() -> MetadataOutcome {
        MetadataOutcome::Present(CaptureMetadata {
            make: Some("Canon".to_string()),
            field_count: 1,
            ..CaptureMetadata::default()
        })
    }

    fn dalle_manifest() -> ProvenanceOutcome {
        let record = ProvenanceRecord {
            generator_name: "DALL·E 3".to_string(),
            ..ProvenanceRecord::unknown()
        };
        let generated = is_ai_generated(&record);
        ProvenanceOutcome::Manifest { record, generated }
    }

    #[test]
    fn test_generated_manifest_scores_high_regardless_of_metadata() {
        for metadata in [MetadataOutcome::Absent, camera_metadata()] {
            let analysis = run_ready(analyze(
                &FixedProvenance(dalle_manifest()),
                &FixedMetadata(metadata),
                b"bytes",
                "image/png",
            ));
            assert!(analysis.provenance.is_generated());
            assert_eq!(analysis.probability, 95);
            assert_eq!(analysis.band(), AuthenticityBand::LikelySynthetic);
        }
    }

    #[test]
    fn test_no_manifest_with_metadata_scores_low() {
        let analysis = run_ready(analyze(
            &FixedProvenance(ProvenanceOutcome::NoManifest),
            &FixedMetadata(camera_metadata()),
            b"bytes",
            "image/jpeg",
        ));
        assert_eq!(analysis.probability, 10);
        assert_eq!(analysis.authentic_percentage(), 90);
    }

    #[test]
    fn test_no_manifest_without_metadata_is_ambiguous() {
        let analysis = run_ready(analyze(
            &FixedProvenance(ProvenanceOutcome::NoManifest),
            &FixedMetadata(MetadataOutcome::Absent),
            b"bytes",
            "image/jpeg",
        ));
        assert_eq!(analysis.probability, 50);
        assert_eq!(analysis.band(), AuthenticityBand::Uncertain);
    }

    #[test]
    fn test_provenance_failure_still_scores() {
        let analysis = run_ready(analyze(
            &FixedProvenance(ProvenanceOutcome::Failed(ProbeFailure::Undecodable)),
            &FixedMetadata(camera_metadata()),
            b"bytes",
            "image/jpeg",
        ));
        assert!(analysis.provenance.error().is_some());
        assert_eq!(analysis.probability, 10);
    }
}
