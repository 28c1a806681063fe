//! Test fixtures and constants.

/// Reference colors with their expected Oklab / Oklch values
pub mod colors {
    /// (input, L, a, b, C, h)
    pub type Reference = (&'static str, f64, f64, f64, f64, f64);

    pub const RED: Reference = ("#FF0000", 0.627955, 0.224863, 0.125846, 0.257683, 29.233885);
    pub const GREEN: Reference = ("#00FF00", 0.866440, -0.233888, 0.179498, 0.294827, 142.495339);
    pub const BLUE: Reference = ("#0000FF", 0.452014, -0.032457, -0.311528, 0.313214, 264.052021);
    pub const WHITE: Reference = ("#FFFFFF", 1.0, 0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Reference = ("#000000", 0.0, 0.0, 0.0, 0.0, 0.0);

    pub const ALL: [Reference; 5] = [RED, GREEN, BLUE, WHITE, BLACK];
}

/// A line-oriented palette file with comments, blanks, and one bad entry
pub const PALETTE_FILE: &str = "\
// brand palette
#FF0000
0,255,0

rgb(0, 0, 255)
   // neutrals
FFFFFF
#GG0000
0 0 0
";

/// Inputs that must be rejected as invalid format
pub const INVALID_INPUTS: &[&str] = &[
    "",
    "#",
    "#FFF",
    "#FFFFFFF",
    "##FFFFFF",
    "#GGGGGG",
    "255,0",
    "255,0,0,0",
    "256,0,0",
    "-1,0,0",
    "rgb(255, 0, 0",
    "red",
];
