use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Media probe failed for '{path}': {reason}")]
    ProbeError { path: String, reason: String },

    #[error("Playback error: {message}")]
    PlaybackError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Media,
    System,
}

impl DecoderError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 探測失敗只會略過自動停止，不影響播放
            DecoderError::ProbeError { .. } => ErrorSeverity::Low,
            DecoderError::PlaybackError { .. } => ErrorSeverity::Medium,
            DecoderError::ConfigValidationError { .. }
            | DecoderError::InvalidConfigValueError { .. }
            | DecoderError::MissingConfigError { .. } => ErrorSeverity::High,
            DecoderError::IoError(_) | DecoderError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DecoderError::ConfigValidationError { .. }
            | DecoderError::InvalidConfigValueError { .. }
            | DecoderError::MissingConfigError { .. } => ErrorCategory::Config,
            DecoderError::ProbeError { .. } | DecoderError::PlaybackError { .. } => {
                ErrorCategory::Media
            }
            DecoderError::IoError(_) | DecoderError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DecoderError::ConfigValidationError { field, .. }
            | DecoderError::InvalidConfigValueError { field, .. }
            | DecoderError::MissingConfigError { field } => {
                format!("Check the '{}' setting and try again", field)
            }
            DecoderError::ProbeError { .. } => {
                "Install ffprobe or disable auto-stop".to_string()
            }
            DecoderError::PlaybackError { .. } => {
                "Check the video file and the playback surface".to_string()
            }
            DecoderError::IoError(_) => {
                "Check file permissions and that the media directory exists".to_string()
            }
            DecoderError::SerializationError(_) => {
                "Report output could not be serialized; rerun without --json".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DecoderError::MissingConfigError { field } => {
                format!("A required setting is missing: {}", field)
            }
            DecoderError::ProbeError { path, .. } => {
                format!("Could not read the duration of '{}'", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecoderError>;
