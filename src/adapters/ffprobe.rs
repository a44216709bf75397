use crate::domain::ports::MediaProbe;
use crate::utils::error::{DecoderError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Reads a media file's duration by shelling out to `ffprobe`. Every
/// failure mode (binary missing, non-zero exit, unparsable output) is a
/// recoverable `ProbeError`; callers degrade to playback without auto-stop.
#[derive(Debug, Clone, Default)]
pub struct FfprobeProbe;

impl FfprobeProbe {
    pub fn new() -> Self {
        Self
    }

    fn probe_error(path: &Path, reason: impl Into<String>) -> DecoderError {
        DecoderError::ProbeError {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl MediaProbe for FfprobeProbe {
    async fn duration(&self, path: &Path) -> Result<Duration> {
        let output = Command::new("ffprobe")
            .args(["-v", "error", "-show_entries", "format=duration"])
            .args(["-of", "default=noprint_wrappers=1:nokey=1"])
            .arg(path)
            .output()
            .await
            .map_err(|e| Self::probe_error(path, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Self::probe_error(
                path,
                format!("ffprobe exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let seconds: f64 = stdout
            .trim()
            .parse()
            .map_err(|_| Self::probe_error(path, format!("unparsable duration '{}'", stdout.trim())))?;

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(Self::probe_error(
                path,
                format!("invalid duration {}", seconds),
            ));
        }

        Ok(Duration::from_secs_f64(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_probe_error() {
        let probe = FfprobeProbe::new();
        let result = probe.duration(Path::new("/definitely/not/here.mp4")).await;

        // Either ffprobe is absent or the file is; both surface as ProbeError.
        match result {
            Err(DecoderError::ProbeError { path, .. }) => {
                assert!(path.contains("not/here.mp4"))
            }
            other => panic!("expected ProbeError, got {:?}", other.map(|d| d.as_secs_f64())),
        }
    }
}
