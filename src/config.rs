use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables of the scoring engine.
///
/// Defaults reproduce the reference behaviour; a TOML file only needs to
/// name the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// 埋め込みモデルを使うために必要な回答済みカテゴリ数（人口統計データがない場合）
    pub min_vector_preferences: usize,
    /// 候補者数がこの値以上なら並列にスコアリングする
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_vector_preferences: 4,
            parallel_threshold: 64,
        }
    }
}

impl EngineConfig {
    /// # Errors
    /// Returns [`ConfigError`] when the TOML is malformed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read, is malformed, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// # Errors
    /// Returns [`ConfigError::Invalid`] for zero thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_vector_preferences == 0 {
            return Err(ConfigError::Invalid(
                "min_vector_preferences must be greater than 0".to_string(),
            ));
        }

        if self.parallel_threshold == 0 {
            return Err(ConfigError::Invalid(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
