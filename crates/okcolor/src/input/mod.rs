//! Input shapes and validation
//!
//! This module turns caller input into a normalized [`Srgb`](crate::Srgb)
//! and defines the only error the conversion can return.

mod color_input;
mod error;

pub use color_input::ColorInput;
pub use error::{ColorError, FormatIssue};
