//! Veracity Probes
//!
//! Infrastructure implementations of the probe traits from `veracity-domain`.
//!
//! # Probes
//!
//! - `C2paToolProbe`: runs the external provenance tool against a scratch copy
//!   of the image and classifies its exit status and output
//! - `ExifProbe`: reads capture metadata in-process from the raw bytes
//!
//! The provenance tool is located once, at startup, into a [`ToolLocation`]
//! that is passed to the probe. Nothing here reads global state.
//!
//! # Examples
//!
//! ```no_run
//! use veracity_probe::{Analyzer, ToolConfig, ToolLocation};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let location = ToolLocation::resolve(&ToolConfig::default());
//! let analyzer = Analyzer::new(location);
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let analysis = analyzer.analyze(&bytes, "image/jpeg").await;
//! println!("{}% AI-generated", analysis.probability);
//! # }
//! ```

#![warn(missing_docs)]

pub mod metadata;
pub mod mime;
pub mod provenance;
pub mod report;
pub mod tool;

pub use metadata::ExifProbe;
pub use provenance::{classify_output, C2paToolProbe};
pub use report::AnalysisReport;
pub use tool::{ToolConfig, ToolLocation};

use tracing::info;
use veracity_domain::{analyze, Analysis};

/// Both probes wired together
#[derive(Debug, Clone)]
pub struct Analyzer {
    provenance: C2paToolProbe,
    metadata: ExifProbe,
}

impl Analyzer {
    /// Create an analyzer around a resolved tool location
    pub fn new(location: ToolLocation) -> Self {
        Self {
            provenance: C2paToolProbe::new(location),
            metadata: ExifProbe,
        }
    }

    /// Where the provenance tool was found, if anywhere
    pub fn tool_location(&self) -> &ToolLocation {
        self.provenance.location()
    }

    /// Run both probes on one image and score it
    ///
    /// Waits on the external tool. Dropping the future kills the tool and
    /// removes its scratch file.
    pub async fn analyze(&self, bytes: &[u8], mime_type: &str) -> Analysis {
        let analysis = analyze(&self.provenance, &self.metadata, bytes, mime_type).await;

        info!(
            "Analyzed {} bytes ({}): generated={}, manifest={}, metadata={}, probability={}",
            bytes.len(),
            mime_type,
            analysis.provenance.is_generated(),
            analysis.provenance.record().is_some(),
            analysis.metadata.is_present(),
            analysis.probability
        );

        analysis
    }
}
