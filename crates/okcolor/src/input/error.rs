//! Error types for input normalization
//!
//! Conversion has a single failure mode, [`ColorError::InvalidFormat`].
//! Every arithmetic stage after normalization is total.

use thiserror::Error;

/// Error returned when a color input cannot be normalized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The input is not a 6-digit hex string or a 3-component 0..=255 sequence.
    #[error("invalid color format: {0}")]
    InvalidFormat(FormatIssue),
}

impl ColorError {
    /// Whether this is an input validation failure.
    #[inline]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ColorError::InvalidFormat(_))
    }

    /// What exactly was wrong with the input.
    pub fn issue(&self) -> &FormatIssue {
        match self {
            ColorError::InvalidFormat(issue) => issue,
        }
    }
}

/// Detail attached to [`ColorError::InvalidFormat`].
///
/// Diagnostic only: all variants are the same error kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatIssue {
    /// Hex string does not have exactly 6 digits after an optional '#'
    #[error("expected 6 hex digits after an optional '#', found {len}")]
    HexLength {
        /// Number of characters after stripping '#'
        len: usize,
    },
    /// Non-hexadecimal character in a 6-character hex string
    #[error("invalid hex digit {found:?} at position {position}")]
    HexDigit {
        /// Byte offset within the digits (after '#')
        position: usize,
        /// Offending character
        found: char,
    },
    /// Numeric sequence does not have exactly 3 components
    #[error("expected 3 color components, found {len}")]
    Arity {
        /// Number of components supplied
        len: usize,
    },
    /// Component is not a finite number in 0..=255
    #[error("component {index} is {value}, expected a number in 0..=255")]
    ChannelRange {
        /// Zero-based component index
        index: usize,
        /// Rejected value
        value: f64,
    },
    /// Input is neither a hex string nor a numeric sequence
    #[error("unrecognized color input {0:?}")]
    Unrecognized(String),
}

impl From<FormatIssue> for ColorError {
    fn from(issue: FormatIssue) -> Self {
        ColorError::InvalidFormat(issue)
    }
}
