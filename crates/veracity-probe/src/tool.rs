//! Locating the external provenance tool
//!
//! Prebuilt `c2patool` binaries ship per platform under
//! `<resources_dir>/c2patool/<version>/<platform>/`. The location is resolved
//! once and handed to the probe; a missing binary only disables the
//! provenance probe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where to look for the provenance tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Directory holding the bundled `c2patool/` tree
    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,

    /// Bundled tool version directory (e.g., "v0.16.1")
    #[serde(default = "default_version")]
    pub version: String,

    /// Explicit binary path; skips the platform lookup when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("resources")
}

fn default_version() -> String {
    "v0.16.1".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            resources_dir: default_resources_dir(),
            version: default_version(),
            path: None,
        }
    }
}

/// Resolved provenance tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolLocation {
    /// The binary exists at this path
    Available(PathBuf),

    /// No usable binary, with the reason
    Unavailable(String),
}

impl ToolLocation {
    /// Resolve the tool for the platform this process runs on
    pub fn resolve(config: &ToolConfig) -> Self {
        let location = Self::resolve_for(config, std::env::consts::OS);
        match &location {
            ToolLocation::Available(path) => info!("Provenance tool: {}", path.display()),
            ToolLocation::Unavailable(reason) => warn!("Provenance tool unavailable: {}", reason),
        }
        location
    }

    /// Resolve the tool for a given platform name (as in `std::env::consts::OS`)
    pub fn resolve_for(config: &ToolConfig, os: &str) -> Self {
        if let Some(path) = &config.path {
            return Self::existing(path.clone());
        }

        let Some((platform_dir, binary_name)) = platform_binary(os) else {
            return ToolLocation::Unavailable(format!("no bundled binary for platform '{}'", os));
        };

        let path = config
            .resources_dir
            .join("c2patool")
            .join(&config.version)
            .join(platform_dir)
            .join(binary_name);

        Self::existing(path)
    }

    /// Path of the binary, if available
    pub fn path(&self) -> Option<&Path> {
        match self {
            ToolLocation::Available(path) => Some(path),
            ToolLocation::Unavailable(_) => None,
        }
    }

    /// Whether the binary was found
    pub fn is_available(&self) -> bool {
        matches!(self, ToolLocation::Available(_))
    }

    fn existing(path: PathBuf) -> Self {
        if path.is_file() {
            ToolLocation::Available(path)
        } else {
            ToolLocation::Unavailable(format!("binary not found at {}", path.display()))
        }
    }
}

impl fmt::Display for ToolLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolLocation::Available(path) => write!(f, "{}", path.display()),
            ToolLocation::Unavailable(reason) => write!(f, "unavailable ({})", reason),
        }
    }
}

/// Bundle directory and binary file name per platform
fn platform_binary(os: &str) -> Option<(&'static str, &'static str)> {
    match os {
        "windows" => Some(("Windows", "c2patool.exe")),
        "linux" => Some(("Linux", "c2patool")),
        "macos" => Some(("macOS", "c2patool")),
        _ => None,
    }
}
