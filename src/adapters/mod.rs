// Adapters layer: concrete implementations for the playback surface and
// the media-duration probe.

pub mod console;
pub mod ffprobe;

pub use console::ConsoleSurface;
pub use ffprobe::FfprobeProbe;
