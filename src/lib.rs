pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{ConsoleSurface, FfprobeProbe};
pub use crate::core::engine::ConversionEngine;
pub use crate::core::reducer::reduce;
pub use crate::domain::model::{AssetOutcome, ConversionReport};
pub use crate::utils::error::{DecoderError, Result};
