use crate::error::AppError;
use crate::models::{AppConfig, BatchReport, ConversionReport, OutputFormat};

/// Turns a [`BatchReport`] into text in the configured output format
pub struct Renderer {
    format: OutputFormat,
    precision: usize,
}

impl Renderer {
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        Self { format, precision }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.format, config.precision)
    }

    pub fn render(&self, report: &BatchReport) -> Result<String, AppError> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            OutputFormat::Text => Ok(self.render_text(report)),
            OutputFormat::Css => Ok(self.render_css(report)),
        }
    }

    /// Aligned columns: input, then `oklab L a b` and/or `oklch L C h`
    fn render_text(&self, report: &BatchReport) -> String {
        let p = self.precision;
        let width = report
            .converted
            .iter()
            .map(|r| r.input.chars().count())
            .chain(report.failed.iter().map(|f| f.input.chars().count()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(report.len());
        for converted in &report.converted {
            let mut line = format!("{:<width$}", converted.input);
            if let Some(lab) = converted.oklab {
                line.push_str(&format!(
                    "  oklab {:.p$} {:.p$} {:.p$}",
                    lab.l, lab.a, lab.b
                ));
            }
            if let Some(lch) = converted.oklch {
                line.push_str(&format!(
                    "  oklch {:.p$} {:.p$} {:.p$}",
                    lch.l, lch.c, lch.h
                ));
            }
            lines.push(line);
        }
        for failed in &report.failed {
            lines.push(format!("{:<width$}  error: {}", failed.input, failed.error));
        }
        lines.join("\n")
    }

    /// One CSS Color 4 value per line, each preceded by its input as a comment
    fn render_css(&self, report: &BatchReport) -> String {
        let mut lines = Vec::with_capacity(report.len());
        for converted in &report.converted {
            lines.extend(self.css_values(converted));
        }
        for failed in &report.failed {
            lines.push(format!("/* {}: {} */", failed.input, failed.error));
        }
        lines.join("\n")
    }

    fn css_values(&self, converted: &ConversionReport) -> Vec<String> {
        let p = self.precision;
        let mut values = Vec::with_capacity(2);
        if let Some(lab) = converted.oklab {
            values.push(format!("/* {} */ {:.p$}", converted.input, lab));
        }
        if let Some(lch) = converted.oklch {
            values.push(format!("/* {} */ {:.p$}", converted.input, lch));
        }
        values
    }
}
