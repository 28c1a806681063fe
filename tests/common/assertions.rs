//! Assertion helpers for tests.

use colorswan::models::ConversionReport;

use super::fixtures::colors::Reference;

/// Tolerance for comparing against published reference values
pub const REFERENCE_TOLERANCE: f64 = 1e-3;

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{what}: expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

/// Assert a report carries the Oklab and Oklch values of a reference color
pub fn assert_matches_reference(report: &ConversionReport, reference: Reference) {
    let (input, l, a, b, c, h) = reference;

    let lab = report
        .oklab
        .unwrap_or_else(|| panic!("{input}: missing oklab in report"));
    assert_close(lab.l, l, REFERENCE_TOLERANCE, &format!("{input} L"));
    assert_close(lab.a, a, REFERENCE_TOLERANCE, &format!("{input} a"));
    assert_close(lab.b, b, REFERENCE_TOLERANCE, &format!("{input} b"));

    let lch = report
        .oklch
        .unwrap_or_else(|| panic!("{input}: missing oklch in report"));
    assert_close(lch.l, l, REFERENCE_TOLERANCE, &format!("{input} L"));
    assert_close(lch.c, c, REFERENCE_TOLERANCE, &format!("{input} C"));
    assert_close(lch.h, h, REFERENCE_TOLERANCE, &format!("{input} h"));
}

/// Assert every line of rendered output satisfies `predicate`
pub fn assert_each_line(output: &str, predicate: impl Fn(&str) -> bool, what: &str) {
    for line in output.lines() {
        assert!(predicate(line), "{what}: unexpected line {line:?}\n{output}");
    }
}
