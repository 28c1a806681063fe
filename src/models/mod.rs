pub mod config;
pub mod report;

pub use config::{AppConfig, OutputFormat, MAX_PRECISION};
pub use report::{BatchReport, ConversionReport, FailedInput};
