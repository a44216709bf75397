use crate::domain::ports::VideoSurface;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Headless stand-in for the GUI video widget: playback actions are
/// rendered to the terminal instead of a window.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VideoSurface for ConsoleSurface {
    async fn play(&self, path: &Path) -> Result<()> {
        println!("▶️  Playing: {}", path.display());
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        println!("⏹  Playback stopped");
        Ok(())
    }

    async fn show_message(&self, text: &str) -> Result<()> {
        println!("❓ {}", text);
        Ok(())
    }
}
