use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// The external playback surface (a GUI video widget in the full
/// application). The engine only ever talks to it through these three
/// operations.
#[async_trait]
pub trait VideoSurface: Send + Sync {
    async fn play(&self, path: &Path) -> Result<()>;
    async fn stop(&self) -> Result<()>;
    async fn show_message(&self, text: &str) -> Result<()>;
}

/// Media-duration probe used to schedule the auto-stop timer.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    async fn duration(&self, path: &Path) -> Result<Duration>;
}

pub trait ConfigProvider: Send + Sync {
    fn media_dir(&self) -> &str;
    fn auto_stop(&self) -> bool;
}
