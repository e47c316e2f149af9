//! AI-generated probability heuristic
//!
//! Demonstration only: the score is a lookup over two signals, not a model.

/// Score when the provenance manifest attributes the asset to an AI tool
pub const GENERATED_SCORE: u8 = 95;

/// Score when neither signal is available
pub const AMBIGUOUS_SCORE: u8 = 50;

/// Score when capture metadata is present without AI attribution
pub const CAPTURED_SCORE: u8 = 10;

/// Best-guess probability (0-100) that an image was AI-generated
pub fn ai_probability(provenance_generated: bool, metadata_present: bool) -> u8 {
    if provenance_generated {
        GENERATED_SCORE
    } else if !metadata_present {
        AMBIGUOUS_SCORE
    } else {
        CAPTURED_SCORE
    }
}

/// Coarse reading of a probability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticityBand {
    /// Below 30: few signs of generation or manipulation
    LikelyAuthentic,

    /// 30 to 69: some indicators, significant uncertainty
    Uncertain,

    /// 70 and above: strong indicators of non-authentic content
    LikelySynthetic,
}

impl AuthenticityBand {
    /// Band for a probability score
    pub fn from_probability(probability: u8) -> Self {
        match probability {
            0..=29 => AuthenticityBand::LikelyAuthentic,
            30..=69 => AuthenticityBand::Uncertain,
            _ => AuthenticityBand::LikelySynthetic,
        }
    }

    /// Get the band name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthenticityBand::LikelyAuthentic => "likely_authentic",
            AuthenticityBand::Uncertain => "uncertain",
            AuthenticityBand::LikelySynthetic => "likely_synthetic",
        }
    }

    /// One-sentence summary for reports
    pub fn summary(&self) -> &'static str {
        match self {
            AuthenticityBand::LikelyAuthentic => {
                "This image is likely authentic with minimal signs of manipulation or AI generation."
            }
            AuthenticityBand::Uncertain => {
                "This image has some characteristics that could indicate it's not authentic, but with significant uncertainty."
            }
            AuthenticityBand::LikelySynthetic => {
                "This image shows strong indicators of being non-authentic (manipulated, AI-generated, or deepfake)."
            }
        }
    }
}

/// Complement of the AI probability
pub fn authentic_percentage(probability: u8) -> u8 {
    100u8.saturating_sub(probability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lookup_table() {
        assert_eq!(ai_probability(true, true), 95);
        assert_eq!(ai_probability(true, false), 95);
        assert_eq!(ai_probability(false, false), 50);
        assert_eq!(ai_probability(false, true), 10);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(AuthenticityBand::from_probability(0), AuthenticityBand::LikelyAuthentic);
        assert_eq!(AuthenticityBand::from_probability(29), AuthenticityBand::LikelyAuthentic);
        assert_eq!(AuthenticityBand::from_probability(30), AuthenticityBand::Uncertain);
        assert_eq!(AuthenticityBand::from_probability(69), AuthenticityBand::Uncertain);
        assert_eq!(AuthenticityBand::from_probability(70), AuthenticityBand::LikelySynthetic);
        assert_eq!(AuthenticityBand::from_probability(100), AuthenticityBand::LikelySynthetic);
    }

    #[test]
    fn test_heuristic_scores_land_in_distinct_bands() {
        assert_eq!(
            AuthenticityBand::from_probability(ai_probability(false, true)),
            AuthenticityBand::LikelyAuthentic
        );
        assert_eq!(
            AuthenticityBand::from_probability(ai_probability(false, false)),
            AuthenticityBand::Uncertain
        );
        assert_eq!(
            AuthenticityBand::from_probability(ai_probability(true, false)),
            AuthenticityBand::LikelySynthetic
        );
    }

    proptest! {
        #[test]
        fn prop_generated_dominates(metadata_present in any::<bool>()) {
            prop_assert_eq!(ai_probability(true, metadata_present), GENERATED_SCORE);
        }

        #[test]
        fn prop_score_is_a_percentage(generated in any::<bool>(), metadata_present in any::<bool>()) {
            let score = ai_probability(generated, metadata_present);
            prop_assert!(score <= 100);
            prop_assert_eq!(authentic_percentage(score) + score, 100);
        }
    }
}
