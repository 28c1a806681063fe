//! Test application factory for integration tests.

use std::io::Cursor;
use std::path::PathBuf;

use colorswan::error::AppError;
use colorswan::models::{AppConfig, BatchReport};
use colorswan::services::{BatchConverter, Renderer};

/// Configured converter and renderer, wired the same way as the binary
pub struct TestApp {
    pub config: AppConfig,
    dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Create a test application from a YAML config written to disk
    pub fn with_config_file(yaml: &str) -> Self {
        let app = Self::new();
        let path = app.write_file("config.yaml", yaml);
        Self {
            config: AppConfig::load(Some(path.as_path())),
            ..app
        }
    }

    /// Write a file into the app's temp directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn converter(&self) -> BatchConverter {
        BatchConverter::from_config(&self.config)
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::from_config(&self.config)
    }

    /// Convert a list of inputs
    pub fn convert(&self, inputs: &[&str]) -> Result<BatchReport, AppError> {
        self.converter().convert_all(inputs.iter().copied())
    }

    /// Convert line-oriented text
    pub fn convert_text(&self, text: &str) -> Result<BatchReport, AppError> {
        self.converter().convert_lines(Cursor::new(text))
    }

    /// Convert line-oriented text from a file
    pub fn convert_file(&self, name: &str, content: &str) -> Result<BatchReport, AppError> {
        let path = self.write_file(name, content);
        let file = std::fs::File::open(path)?;
        self.converter()
            .convert_lines(std::io::BufReader::new(file))
    }

    /// Convert then render, as the CLI does
    pub fn run(&self, inputs: &[&str]) -> Result<String, AppError> {
        let report = self.convert(inputs)?;
        self.renderer().render(&report)
    }
}
