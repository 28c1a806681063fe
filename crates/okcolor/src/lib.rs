//! okcolor: Precise sRGB to Oklab / Oklch conversion
//!
//! Converts a color given as a 6-digit hex string or an 8-bit RGB triple into
//! the perceptually uniform Oklab space and its polar form Oklch. The
//! conversion is a pure function: no state, no I/O, no allocation beyond
//! the input string.
//!
//! # Quick Start
//!
//! ```
//! use okcolor::{convert, View};
//!
//! let result = convert("#FF0000").unwrap();
//! assert!((result.oklab.l - 0.62796).abs() < 1e-4);
//! assert!((result.oklch.h - 29.2339).abs() < 1e-3);
//!
//! // Only the polar view
//! let lch = result.project(View::Oklch).oklch().unwrap();
//! assert_eq!(lch, result.oklch);
//! ```
//!
//! # Pipeline
//!
//! 1. [`ColorInput::normalize`]: hex string or `0..=255` triple to [`Srgb`]
//! 2. [`LinearRgb`]: sRGB EOTF (IEC 61966-2-1)
//! 3. [`Xyz`] then [`Lms`]: two fixed 3x3 matrices
//! 4. [`LmsPrime`]: signed cube root
//! 5. [`Oklab`] then [`Oklch`]: third matrix, then Cartesian to polar
//!
//! Only step 1 can fail, with [`ColorError::InvalidFormat`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the value and result types, using
//!   the conventional `L`, `a`, `b` / `L`, `C`, `h` field names.

pub mod color;
mod convert;
mod input;

pub use color::{
    LinearRgb, Lms, LmsPrime, Oklab, Oklch, Srgb, Xyz, ACHROMATIC_CHROMA,
};
pub use convert::{convert, Conversion, Projection, UnknownView, View};
pub use input::{ColorError, ColorInput, FormatIssue};
