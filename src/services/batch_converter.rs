use std::io::BufRead;

use okcolor::{ColorInput, View};

use crate::error::AppError;
use crate::models::{AppConfig, BatchReport, ConversionReport, FailedInput};

/// Converts many textual color inputs, collecting or aborting on failures
pub struct BatchConverter {
    view: View,
    fail_fast: bool,
}

impl BatchConverter {
    pub fn new(view: View, fail_fast: bool) -> Self {
        Self { view, fail_fast }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.view, config.fail_fast)
    }

    /// Parse and convert a single input string
    pub fn convert_one(&self, input: &str) -> Result<ConversionReport, AppError> {
        let input = input.trim();
        let color: ColorInput = input.parse().map_err(|e| AppError::color(input, e))?;
        let conversion = okcolor::convert(color).map_err(|e| AppError::color(input, e))?;

        tracing::debug!(
            input,
            l = conversion.oklab.l,
            c = conversion.oklch.c,
            h = conversion.oklch.h,
            "Converted color"
        );

        Ok(ConversionReport::new(input, conversion.project(self.view)))
    }

    /// Convert every input in order
    pub fn convert_all<'a, I>(&self, inputs: I) -> Result<BatchReport, AppError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = BatchReport::default();
        for input in inputs {
            self.record(&mut report, input)?;
        }
        Self::log_summary(&report);
        Ok(report)
    }

    /// Convert one color per line.
    ///
    /// Blank lines and lines starting with `//` are skipped. `#` cannot mark
    /// comments because hex colors start with it.
    pub fn convert_lines<R: BufRead>(&self, reader: R) -> Result<BatchReport, AppError> {
        let mut report = BatchReport::default();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }
            self.record(&mut report, trimmed)?;
        }
        Self::log_summary(&report);
        Ok(report)
    }

    fn record(&self, report: &mut BatchReport, input: &str) -> Result<(), AppError> {
        match self.convert_one(input) {
            Ok(converted) => report.converted.push(converted),
            Err(e) if self.fail_fast => return Err(e),
            Err(e) => {
                let error = match &e {
                    AppError::Color { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                tracing::warn!(input = input.trim(), %error, "Skipping invalid color");
                report.failed.push(FailedInput {
                    input: input.trim().to_string(),
                    error,
                });
            }
        }
        Ok(())
    }

    fn log_summary(report: &BatchReport) {
        tracing::info!(
            converted = report.converted.len(),
            failed = report.failed.len(),
            "Batch complete"
        );
    }
}
