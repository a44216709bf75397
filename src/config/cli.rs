use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "name-decoder")]
#[command(about = "Maps a name to its numerology number and the video to play for it")]
pub struct CliConfig {
    /// The name to convert
    pub name: String,

    /// Directory holding the video files ({1..9,11,22,33}.mp4, not_found.mp4)
    #[arg(long, default_value = ".")]
    pub media_dir: String,

    /// Probe the video duration and stop playback when it elapses
    #[arg(long)]
    pub auto_stop: bool,

    /// Print the conversion report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Optional TOML configuration file; overrides the flags above
    #[arg(short, long)]
    pub config: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn media_dir(&self) -> &str {
        &self.media_dir
    }

    fn auto_stop(&self) -> bool {
        self.auto_stop
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("media_dir", &self.media_dir)
    }
}
