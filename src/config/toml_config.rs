use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DecoderError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub decoder: DecoderSection,
    pub media: MediaSection,
    pub playback: Option<PlaybackSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderSection {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSection {
    pub base_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSection {
    pub auto_stop: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DecoderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DecoderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${VIDEO_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("decoder.name", &self.decoder.name)?;
        validate_path("media.base_dir", &self.media.base_dir)?;
        Ok(())
    }

    pub fn auto_stop_enabled(&self) -> bool {
        self.playback
            .as_ref()
            .and_then(|p| p.auto_stop)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn media_dir(&self) -> &str {
        &self.media.base_dir
    }

    fn auto_stop(&self) -> bool {
        self.auto_stop_enabled()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
