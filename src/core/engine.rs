use crate::core::dispatcher::resolve_asset;
use crate::core::reducer::reduce;
use crate::domain::model::{AssetOutcome, ConversionReport};
use crate::domain::ports::{ConfigProvider, MediaProbe, VideoSurface};
use crate::utils::error::Result;
use std::path::Path;
use std::sync::Arc;

/// Linear conversion flow: name → reduced number → asset → surface
/// side effect. Generic over the playback surface, the duration probe and
/// the configuration source so the whole flow is testable headlessly.
pub struct ConversionEngine<S, M, C> {
    surface: Arc<S>,
    probe: M,
    config: C,
}

impl<S, M, C> ConversionEngine<S, M, C>
where
    S: VideoSurface + 'static,
    M: MediaProbe,
    C: ConfigProvider,
{
    pub fn new(surface: S, probe: M, config: C) -> Self {
        Self {
            surface: Arc::new(surface),
            probe,
            config,
        }
    }

    pub async fn convert(&self, name: &str) -> Result<ConversionReport> {
        // 名字轉換成命理數字
        let number = reduce(name);
        tracing::info!("🔢 '{}' reduces to {}", name, number);

        let outcome = resolve_asset(self.config.media_dir(), &number);

        let mut report = ConversionReport {
            name: name.to_string(),
            number,
            video: None,
            fallback: false,
            missing: None,
            auto_stop_secs: None,
        };

        match outcome {
            AssetOutcome::Found(path) => {
                tracing::info!("🎬 Playing {}", path.display());
                self.surface.play(&path).await?;
                report.video = Some(path.display().to_string());
                report.auto_stop_secs = self.schedule_auto_stop(&path).await;
            }
            AssetOutcome::FallbackFound(path) => {
                tracing::warn!(
                    "🎬 No video for {}, playing fallback {}",
                    report.number,
                    path.display()
                );
                self.surface.play(&path).await?;
                report.video = Some(path.display().to_string());
                report.fallback = true;
                report.auto_stop_secs = self.schedule_auto_stop(&path).await;
            }
            AssetOutcome::NotFound { filename } => {
                let message = format!("Video '{}' not found.", filename);
                tracing::warn!("❓ {}", message);
                self.surface.show_message(&message).await?;
                report.missing = Some(filename);
            }
        }

        Ok(report)
    }

    /// Probe the media duration and spawn a one-shot timer that stops the
    /// surface once it elapses. Fire-and-forget, no cancellation path; a
    /// probe failure skips the timer and playback proceeds unbounded.
    async fn schedule_auto_stop(&self, path: &Path) -> Option<f64> {
        if !self.config.auto_stop() {
            return None;
        }

        match self.probe.duration(path).await {
            Ok(duration) => {
                tracing::info!("⏱ Auto-stop scheduled in {:.1}s", duration.as_secs_f64());
                let surface = Arc::clone(&self.surface);
                tokio::spawn(async move {
                    tokio::time::sleep(duration).await;
                    if let Err(e) = surface.stop().await {
                        tracing::warn!("⏱ Auto-stop failed: {}", e);
                    }
                });
                Some(duration.as_secs_f64())
            }
            Err(e) => {
                tracing::warn!("⏱ Duration probe failed, playback will not auto-stop: {}", e);
                None
            }
        }
    }
}
