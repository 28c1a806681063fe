use crate::color::{Oklab, Oklch, Srgb};
use crate::input::{ColorError, ColorInput};

use super::view::{Projection, View};

/// Result of one conversion: the Oklab coordinates and their polar form.
///
/// `oklch` is derived from the stored `oklab`, so `oklch.l == oklab.l`
/// bit-for-bit and `oklch.c == sqrt(a² + b²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    pub oklab: Oklab,
    pub oklch: Oklch,
}

impl Conversion {
    /// Run the pipeline on an already normalized color. Total.
    pub fn from_srgb(srgb: Srgb) -> Self {
        let oklab = Oklab::from(srgb);
        Self {
            oklab,
            oklch: Oklch::from(oklab),
        }
    }

    /// Select one view of this result without recomputing anything.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::{convert, Projection, View};
    ///
    /// let result = convert("#FF0000").unwrap();
    /// match result.project(View::Oklch) {
    ///     Projection::Oklch(lch) => assert!((lch.c - 0.25768).abs() < 1e-4),
    ///     other => panic!("unexpected projection {other:?}"),
    /// }
    /// ```
    pub fn project(&self, view: View) -> Projection {
        match view {
            View::Oklab => Projection::Oklab(self.oklab),
            View::Oklch => Projection::Oklch(self.oklch),
            View::All => Projection::All(*self),
        }
    }
}

impl From<Srgb> for Conversion {
    fn from(srgb: Srgb) -> Self {
        Self::from_srgb(srgb)
    }
}

/// Convert a hex string or an 8-bit RGB triple to Oklab and Oklch.
///
/// Fails only with [`ColorError::InvalidFormat`], before any arithmetic runs.
///
/// # Examples
///
/// ```
/// use okcolor::convert;
///
/// let white = convert("#FFFFFF").unwrap();
/// assert!((white.oklab.l - 1.0).abs() < 1e-6);
/// assert_eq!(white.oklch.h, 0.0);
///
/// let red = convert([255u8, 0, 0]).unwrap();
/// assert!((red.oklch.h - 29.2339).abs() < 1e-3);
///
/// assert!(convert("invalid").is_err());
/// ```
pub fn convert<I: Into<ColorInput>>(input: I) -> Result<Conversion, ColorError> {
    let srgb = input.into().normalize()?;
    Ok(Conversion::from_srgb(srgb))
}
