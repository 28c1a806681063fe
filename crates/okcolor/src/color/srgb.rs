//! sRGB color type
//!
//! sRGB is the standard encoding for display and storage. Its channels are
//! gamma encoded, so arithmetic on them is neither linear nor perceptually
//! uniform.

/// A color in sRGB color space.
///
/// Channels are normalized to `0.0..=1.0` (mapping to `0..=255` for 8-bit).
/// Use [`ColorInput`](crate::ColorInput) to build one from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma encoded, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from normalized channel values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use okcolor::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Channels as an array [R, G, B].
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}
