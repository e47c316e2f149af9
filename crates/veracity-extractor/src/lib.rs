//! Veracity Extractor
//!
//! Flattens a C2PA-style provenance manifest into a [`ProvenanceRecord`].
//!
//! # Overview
//!
//! The provenance tool dumps its manifest store as nested JSON. Only a handful
//! of fields matter for a verdict, and the shape changes between tool
//! versions, so extraction walks the structure leniently: any missing or
//! wrongly typed branch falls back to a default instead of failing.
//!
//! # Manifest shape
//!
//! ```text
//! {
//!   "active_manifest": "<id>",
//!   "manifests": {
//!     "<id>": {
//!       "claim":      { "instanceID", "dc:title", "claim_generator_info": { "name" } },
//!       "signature":  { "issuer" },
//!       "assertion_store": {
//!         "c2pa.ingredient.v3": { "activeManifest": { "url": ".../<ingredient-id>" } }
//!       }
//!     },
//!     "<ingredient-id>": {
//!       "assertion_store": {
//!         "c2pa.actions.v2": { "actions": [ { "action", "softwareAgent", "digitalSourceType" } ] }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! # Example Usage
//!
//! ```
//! use veracity_extractor::parse_manifest;
//!
//! let record = parse_manifest(r#"{"active_manifest": "m1", "manifests": {"m1": {}}}"#).unwrap();
//! assert_eq!(record.title, "Unknown");
//! ```
//!
//! [`ProvenanceRecord`]: veracity_domain::ProvenanceRecord

#![warn(missing_docs)]

mod error;
mod manifest;
mod parser;

pub use error::ExtractorError;
pub use manifest::extract_record;
pub use parser::parse_manifest;
