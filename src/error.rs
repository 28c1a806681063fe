use okcolor::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{input:?}: {source}")]
    Color {
        input: String,
        #[source]
        source: ColorError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown output format {0:?} (expected json, yaml, text or css)")]
    UnknownFormat(String),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn color(input: impl Into<String>, source: ColorError) -> Self {
        AppError::Color {
            input: input.into(),
            source,
        }
    }
}
