//! Oklch polar color space
//!
//! Oklch is the polar form of Oklab:
//! - **L** (Lightness): Same as Oklab L
//! - **C** (Chroma): Distance from the neutral axis, `sqrt(a² + b²)`
//! - **h** (Hue): Angle of `(a, b)` in degrees, in `[0, 360)`

use std::fmt;

use super::oklab::Oklab;

/// Chroma below which a color counts as achromatic and its hue is reported
/// as 0.0.
///
/// Neutral sRGB grays land around 1e-8 after matrix rounding; the least
/// chromatic non-gray 8-bit colors are near 1e-3.
pub const ACHROMATIC_CHROMA: f64 = 1e-6;

/// Oklch: Polar form of Oklab (Lightness, Chroma, Hue).
///
/// # Components
///
/// - `l`: Lightness (identical to the source Oklab L)
/// - `c`: Chroma, always >= 0.0
/// - `h`: Hue angle in degrees, always in `[0.0, 360.0)`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    pub c: f64,
    /// Hue: angle in degrees
    pub h: f64,
}

impl Oklch {
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Whether chroma is too small for hue to carry meaning.
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.c < ACHROMATIC_CHROMA
    }
}

/// Normalize an angle in degrees into `[0, 360)`.
#[inline]
fn normalize_hue(degrees: f64) -> f64 {
    let mut h = degrees;
    if h < 0.0 {
        h += 360.0;
    }
    // A tiny negative angle rounds up to exactly 360.0 above
    if h >= 360.0 {
        h -= 360.0;
    }
    h
}

impl From<Oklab> for Oklch {
    /// Convert from Oklab to Oklch (Cartesian to polar).
    ///
    /// L is copied, never recomputed.
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            normalize_hue(lab.b.atan2(lab.a).to_degrees())
        };
        Self { l: lab.l, c, h }
    }
}

impl fmt::Display for Oklch {
    /// CSS Color 4 notation, `oklch(L C h)`. Precision defaults to 4 places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(4);
        write!(f, "oklch({:.*} {:.*} {:.*})", p, self.l, p, self.c, p, self.h)
    }
}
