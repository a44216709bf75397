use serde::Serialize;
use std::path::PathBuf;

/// Result of resolving a reduced number to a playable asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    /// `<number>.mp4` exists at the base directory.
    Found(PathBuf),
    /// The number's own video is missing but the fallback video exists.
    FallbackFound(PathBuf),
    /// Neither exists; carries the filename that was looked for.
    NotFound { filename: String },
}

/// One completed conversion, serializable for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub name: String,
    pub number: String,
    pub video: Option<String>,
    pub fallback: bool,
    pub missing: Option<String>,
    pub auto_stop_secs: Option<f64>,
}
