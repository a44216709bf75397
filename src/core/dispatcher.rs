//! Maps a reduced number to a playable video file.

use crate::domain::model::AssetOutcome;
use std::path::Path;

/// Fixed fallback played when a number has no video of its own.
pub const FALLBACK_FILENAME: &str = "not_found.mp4";

pub fn video_filename(number: &str) -> String {
    format!("{}.mp4", number)
}

/// Resolve the asset for a reduced number under `base_dir`.
///
/// Existence is re-checked on every call; nothing is cached. The check is
/// not transactional against playback (accepted TOCTOU).
pub fn resolve_asset(base_dir: &str, number: &str) -> AssetOutcome {
    let filename = video_filename(number);
    let candidate = Path::new(base_dir).join(&filename);

    if candidate.exists() {
        return AssetOutcome::Found(candidate);
    }

    // 找不到對應影片時改用預設影片
    let fallback = Path::new(base_dir).join(FALLBACK_FILENAME);
    if fallback.exists() {
        return AssetOutcome::FallbackFound(fallback);
    }

    AssetOutcome::NotFound { filename }
}
