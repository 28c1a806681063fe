//! Color types and the conversion pipeline stages
//!
//! Each stage is a `From` conversion between value types, so the pipeline
//! reads as a chain of type changes:
//!
//! ```text
//! Srgb -> LinearRgb -> Xyz -> Lms -> LmsPrime -> Oklab -> Oklch
//! ```
//!
//! # Example
//!
//! ```
//! use okcolor::{LinearRgb, Oklab, Oklch, Srgb};
//!
//! let srgb = Srgb::from_u8(255, 0, 0);
//! let linear = LinearRgb::from(srgb);
//! let lab = Oklab::from(linear);
//! let lch = Oklch::from(lab);
//! assert!((lch.h - 29.2339).abs() < 1e-3);
//! ```

mod linear_rgb;
mod lms;
pub mod matrix;
mod oklab;
mod oklch;
mod srgb;
mod xyz;

pub use linear_rgb::{srgb_to_linear, LinearRgb};
pub use lms::{Lms, LmsPrime};
pub use oklab::Oklab;
pub use oklch::{Oklch, ACHROMATIC_CHROMA};
pub use srgb::Srgb;
pub use xyz::Xyz;
