//! CIE XYZ color type

use super::linear_rgb::LinearRgb;
use super::matrix::{multiply, LINEAR_SRGB_TO_XYZ};

/// A color in CIE 1931 XYZ space (D65 white point).
///
/// No range constraint: out-of-gamut linear RGB maps to XYZ with negative
/// components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, rgb.to_array());
        Self { x, y, z }
    }
}
