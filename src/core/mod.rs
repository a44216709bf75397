pub mod dispatcher;
pub mod engine;
pub mod reducer;

pub use crate::domain::model::{AssetOutcome, ConversionReport};
pub use crate::domain::ports::{ConfigProvider, MediaProbe, VideoSurface};
pub use crate::utils::error::Result;
