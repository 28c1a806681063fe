//! Colorswan - sRGB to Oklab / Oklch converter
//!
//! Command-line front end for the `okcolor` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
