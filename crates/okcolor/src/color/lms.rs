//! LMS cone response and its cube-root compressed form

use super::matrix::{multiply, signed_cbrt, XYZ_TO_LMS};
use super::xyz::Xyz;

/// Cone response (long, medium, short wavelength).
///
/// Components may be negative for out-of-gamut input; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lms {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

/// LMS after the signed cube-root nonlinearity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsPrime {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl Lms {
    #[inline]
    pub fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    /// Apply the signed cube root to each component.
    #[inline]
    pub fn compress(self) -> LmsPrime {
        LmsPrime {
            l: signed_cbrt(self.l),
            m: signed_cbrt(self.m),
            s: signed_cbrt(self.s),
        }
    }
}

impl LmsPrime {
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.m, self.s]
    }
}

impl From<Xyz> for Lms {
    fn from(xyz: Xyz) -> Self {
        let [l, m, s] = multiply(&XYZ_TO_LMS, xyz.to_array());
        Self { l, m, s }
    }
}
