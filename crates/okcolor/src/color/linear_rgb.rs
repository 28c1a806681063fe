//! Linear RGB color type
//!
//! Linear RGB is proportional to physical light intensity. It is the input
//! to the RGB to XYZ matrix.

use super::srgb::Srgb;

/// sRGB channel value at or below which the EOTF is linear (IEC 61966-2-1).
const EOTF_THRESHOLD: f64 = 0.04045;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but are passed through
/// unclamped when upstream rounding or wide-gamut input pushes them outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array [R, G, B].
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// sRGB electro-optical transfer function for a single channel.
///
/// Piecewise per IEC 61966-2-1: linear segment below the threshold, 2.4 power
/// curve above it. Total over the reals; negative inputs fall on the linear
/// segment.
#[inline]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= EOTF_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode sRGB to linear light, each channel independently.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
