//! Configuration management for the fit analyzer

use crate::error::{FitError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub lexical: LexicalConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// HuggingFace repo id, or a directory name under `models_dir`
    pub embedding_model: String,
    pub models_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalConfig {
    pub max_features: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fit-analyzer")
            .join("models");

        Self {
            models: ModelConfig {
                embedding_model: "minishlab/potion-base-8M".to_string(),
                models_dir,
            },
            lexical: LexicalConfig {
                max_features: 6000,
                ngram_min: 1,
                ngram_max: 2,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                detailed: false,
            },
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| FitError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| FitError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("fit-analyzer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let lex = &self.lexical;
        if lex.max_features == 0 {
            return Err(FitError::Configuration(
                "lexical.max_features must be greater than zero".to_string(),
            ));
        }
        if lex.ngram_min == 0 || lex.ngram_min > lex.ngram_max {
            return Err(FitError::Configuration(format!(
                "invalid n-gram range ({}, {})",
                lex.ngram_min, lex.ngram_max
            )));
        }
        if self.models.embedding_model.trim().is_empty() {
            return Err(FitError::Configuration(
                "models.embedding_model must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the embedding model to a local directory when one exists,
    /// otherwise hand back the repo id for a hub download.
    pub fn embedding_model_source(&self) -> PathBuf {
        let local = self.models.models_dir.join(&self.models.embedding_model);
        if local.exists() {
            local
        } else {
            PathBuf::from(&self.models.embedding_model)
        }
    }
}
