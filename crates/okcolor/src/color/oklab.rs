//! Oklab perceptual color space
//!
//! Oklab is a perceptually uniform Cartesian color space: equal numerical
//! distances correspond to roughly equal perceived differences, which makes
//! it suitable for color comparison, gradients and lightness adjustment.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use std::fmt;

use super::linear_rgb::LinearRgb;
use super::lms::{Lms, LmsPrime};
use super::matrix::{multiply, LMS_PRIME_TO_OKLAB};
use super::srgb::Srgb;
use super::xyz::Xyz;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    /// Lightness
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub l: f64,
    /// Green-red axis: typically -0.4 to 0.4
    pub a: f64,
    /// Blue-yellow axis: typically -0.4 to 0.4
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::Oklab;
    ///
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// assert_eq!(gray.l, 0.5);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in Oklab space (ΔE_OK).
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::Oklab;
    ///
    /// let white = Oklab::new(1.0, 0.0, 0.0);
    /// let black = Oklab::new(0.0, 0.0, 0.0);
    /// assert_eq!(white.distance(black), 1.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Oklab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl From<LmsPrime> for Oklab {
    /// Project compressed cone response onto the Oklab axes.
    fn from(lms: LmsPrime) -> Self {
        let [l, a, b] = multiply(&LMS_PRIME_TO_OKLAB, lms.to_array());
        Self { l, a, b }
    }
}

impl From<LinearRgb> for Oklab {
    /// Linear RGB -> XYZ -> LMS -> LMS' -> Oklab.
    fn from(rgb: LinearRgb) -> Self {
        let lms = Lms::from(Xyz::from(rgb));
        Self::from(lms.compress())
    }
}

impl From<Srgb> for Oklab {
    /// Decode sRGB and run the full chain.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::{Oklab, Srgb};
    ///
    /// let red = Oklab::from(Srgb::from_u8(255, 0, 0));
    /// assert!((red.l - 0.62796).abs() < 1e-4);
    /// ```
    fn from(srgb: Srgb) -> Self {
        Self::from(LinearRgb::from(srgb))
    }
}

impl fmt::Display for Oklab {
    /// CSS Color 4 notation, `oklab(L a b)`. Precision defaults to 4 places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(4);
        write!(f, "oklab({:.*} {:.*} {:.*})", p, self.l, p, self.a, p, self.b)
    }
}
