use crate::cli::ReportFormat;
use crate::core::data::DEFAULT_TOP_WORDS;
use crate::utils::error::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "feedback-analyzer";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub color: bool,
    pub paginate: bool,
    pub default_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub top_words: usize,
    pub lexicon_file: Option<PathBuf>,
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub open_browser: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: true,
            paginate: true,
            default_format: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_WORDS,
            lexicon_file: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        let output_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("reports");

        Self {
            output_dir,
            open_browser: false,
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save()?;
        }
        Ok(())
    }

    /// Load from an explicit path, writing defaults there first if it is missing
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path).map_err(|e| AppError::io(config_path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.analysis.top_words == 0 {
            return Err(AppError::Config(
                "analysis.top_words must be at least 1".to_string(),
            ));
        }

        if let Some(format) = &self.general.default_format
            && ReportFormat::from_str(format, true).is_err()
        {
            return Err(AppError::Config(format!(
                "Unknown default format '{}' (expected terminal, json or html)",
                format
            )));
        }

        if let Some(lexicon) = &self.analysis.lexicon_file
            && !lexicon.exists()
        {
            return Err(AppError::Config(format!(
                "Lexicon file not found: {}",
                lexicon.display()
            )));
        }

        Ok(())
    }

    /// The configured default report format, if any
    pub fn default_format(&self) -> Option<ReportFormat> {
        self.general
            .default_format
            .as_deref()
            .and_then(|f| ReportFormat::from_str(f, true).ok())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::io(config_path, e))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }
}
