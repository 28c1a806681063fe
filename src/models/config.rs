use okcolor::View;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::AppError;

/// Largest number of decimal places accepted for text and CSS output
pub const MAX_PRECISION: usize = 12;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Which representation to emit per color
    #[serde(default)]
    pub view: View,

    /// Output encoding
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places for text and CSS output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Abort a batch on the first invalid color instead of collecting failures
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_precision() -> usize {
    4
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            view: View::default(),
            format: OutputFormat::default(),
            precision: default_precision(),
            fail_fast: false,
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        // An empty file deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional file path.
    ///
    /// Falls back to defaults (with a warning) when the file cannot be read
    /// or parsed, so a broken config never blocks a conversion.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        view = %config.view,
                        format = %config.format,
                        precision = config.precision,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(
        mut self,
        view: Option<View>,
        format: Option<OutputFormat>,
        precision: Option<usize>,
    ) -> Result<Self, AppError> {
        if let Some(view) = view {
            self.view = view;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.precision > MAX_PRECISION {
            return Err(AppError::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

/// How a batch report is rendered
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Text,
    Css,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Text => "text",
            OutputFormat::Css => "css",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "text" | "txt" => Ok(OutputFormat::Text),
            "css" => Ok(OutputFormat::Css),
            _ => Err(AppError::UnknownFormat(s.to_string())),
        }
    }
}
