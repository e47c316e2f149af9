//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur before extraction starts
///
/// Extraction itself never fails; only turning tool output into JSON can.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Tool output was empty
    #[error("Empty manifest output")]
    Empty,

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
