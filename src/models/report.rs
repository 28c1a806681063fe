use okcolor::{Oklab, Oklch, Projection};
use serde::{Deserialize, Serialize};

/// One successfully converted input, narrowed to the configured view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Input exactly as supplied (trimmed)
    pub input: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oklab: Option<Oklab>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oklch: Option<Oklch>,
}

impl ConversionReport {
    pub fn new(input: impl Into<String>, projection: Projection) -> Self {
        Self {
            input: input.into(),
            oklab: projection.oklab(),
            oklch: projection.oklch(),
        }
    }
}

/// An input that failed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedInput {
    pub input: String,
    pub error: String,
}

/// Outcome of converting a list of inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub converted: Vec<ConversionReport>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailedInput>,
}

impl BatchReport {
    /// True when every input converted
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
