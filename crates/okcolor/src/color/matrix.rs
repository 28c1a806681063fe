//! Transform matrices for the sRGB to Oklab pipeline
//!
//! The pipeline applies three fixed 3x3 matrices: linear sRGB to CIE XYZ,
//! XYZ to LMS cone response, and cube-root compressed LMS to Oklab.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

/// A row-major 3x3 matrix.
pub type Matrix3 = [[f64; 3]; 3];

/// Linear sRGB to CIE XYZ (D65).
///
/// This is `M1⁻¹ · M` for Ottosson's published linear-sRGB-to-LMS matrix `M`,
/// so chaining it with [`XYZ_TO_LMS`] reproduces the reference Oklab values
/// to floating-point precision.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const LINEAR_SRGB_TO_XYZ: Matrix3 = [
    [ 0.41243729757610453,  0.35762841310578364, 0.18040430879205865 ],
    [ 0.21263387354682864,  0.71515560456855964, 0.07221053430133420 ],
    [ 0.019262606244585062, 0.11898369968466632, 0.95005365162997224 ],
];

/// CIE XYZ (D65) to LMS cone response (Ottosson's `M1`).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const XYZ_TO_LMS: Matrix3 = [
    [ 0.8189330101, 0.3618667424, -0.1288597137 ],
    [ 0.0329845436, 0.9293118715,  0.0361456387 ],
    [ 0.0482003018, 0.2643662691,  0.6338517070 ],
];

/// Cube-root compressed LMS to Oklab (Ottosson's `M2`).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const LMS_PRIME_TO_OKLAB: Matrix3 = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

/// Multiply a 3x3 matrix with a 3-element column vector.
///
/// `output[i] = Σ_j matrix[i][j] * vector[j]`
#[inline]
pub fn multiply(matrix: &Matrix3, vector: [f64; 3]) -> [f64; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0] * vector[0] + row1[1] * vector[1] + row1[2] * vector[2],
        row2[0] * vector[0] + row2[1] * vector[1] + row2[2] * vector[2],
        row3[0] * vector[0] + row3[1] * vector[1] + row3[2] * vector[2],
    ]
}

/// Cube root that keeps the sign of its argument.
///
/// `powf(1.0 / 3.0)` returns NaN for negative bases. Wide-gamut and
/// out-of-range inputs legitimately produce negative LMS components, which
/// must map to negative roots.
#[inline]
pub fn signed_cbrt(x: f64) -> f64 {
    x.abs().cbrt().copysign(x)
}
