//! Accepted input shapes and their normalization to [`Srgb`]

use std::str::FromStr;

use super::error::{ColorError, FormatIssue};
use crate::color::Srgb;

/// Raw color input before validation.
///
/// Either a hex string (`#RRGGBB` or `RRGGBB`) or three channel values in
/// `0..=255`. Channel values are `f64` so fractional 8-bit values survive;
/// [`ColorInput::normalize`] rejects anything outside the range.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// Six hexadecimal digits, optionally prefixed with a single '#'
    Hex(String),
    /// Red, green and blue in 0..=255
    Rgb([f64; 3]),
}

impl ColorInput {
    /// Build an RGB input from a sequence of any length.
    ///
    /// Fails unless the sequence has exactly three elements. Channel range is
    /// checked later by [`normalize`](Self::normalize).
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::ColorInput;
    ///
    /// assert!(ColorInput::from_components(&[255.0, 0.0, 0.0]).is_ok());
    /// assert!(ColorInput::from_components(&[255.0, 0.0]).is_err());
    /// ```
    pub fn from_components(values: &[f64]) -> Result<Self, ColorError> {
        let rgb: [f64; 3] = values
            .try_into()
            .map_err(|_| FormatIssue::Arity { len: values.len() })?;
        Ok(ColorInput::Rgb(rgb))
    }

    /// Validate the input and scale each channel to `0.0..=1.0`.
    pub fn normalize(&self) -> Result<Srgb, ColorError> {
        match self {
            ColorInput::Hex(s) => parse_hex(s).map(Srgb::from_bytes),
            ColorInput::Rgb(rgb) => {
                for (index, &value) in rgb.iter().enumerate() {
                    if !(0.0..=255.0).contains(&value) {
                        return Err(FormatIssue::ChannelRange { index, value }.into());
                    }
                }
                Ok(Srgb::new(rgb[0] / 255.0, rgb[1] / 255.0, rgb[2] / 255.0))
            }
        }
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse exactly six hex digits, optionally prefixed with one '#'.
fn parse_hex(s: &str) -> Result<[u8; 3], ColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(FormatIssue::HexLength {
            len: digits.chars().count(),
        }
        .into());
    }

    let bytes = digits.as_bytes();
    let mut values = [0u8; 6];
    for (position, &byte) in bytes.iter().enumerate() {
        // Every earlier byte was ASCII, so position is a char boundary
        values[position] = nibble(byte).ok_or_else(|| FormatIssue::HexDigit {
            position,
            found: digits[position..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        })?;
    }

    Ok([
        (values[0] << 4) | values[1],
        (values[2] << 4) | values[3],
        (values[4] << 4) | values[5],
    ])
}

/// Split `r,g,b`, `r g b` or the inside of `rgb(...)` into numbers.
fn parse_components(s: &str) -> Result<ColorInput, ColorError> {
    let values = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| FormatIssue::Unrecognized(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    ColorInput::from_components(&values)
}

impl FromStr for ColorInput {
    type Err = ColorError;

    /// Parse a color from text.
    ///
    /// Supports the following formats (surrounding whitespace is trimmed):
    /// - `#RRGGBB` / `RRGGBB` - 6-digit hex, case-insensitive
    /// - `r,g,b` / `r g b` - three numbers in 0..=255
    /// - `rgb(r, g, b)` - CSS-style functional notation
    ///
    /// Hex input is validated here, so a successfully parsed value always
    /// normalizes unless a numeric channel is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use okcolor::ColorInput;
    ///
    /// let hex: ColorInput = "#FF0000".parse().unwrap();
    /// let rgb: ColorInput = "rgb(255, 0, 0)".parse().unwrap();
    /// assert_eq!(hex.normalize().unwrap(), rgb.normalize().unwrap());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix("rgb(") {
            let inner = rest
                .strip_suffix(')')
                .ok_or_else(|| FormatIssue::Unrecognized(s.to_string()))?;
            return parse_components(inner);
        }

        if s.contains(|c: char| c == ',' || c.is_whitespace()) {
            return parse_components(s);
        }

        parse_hex(s)?;
        Ok(ColorInput::Hex(s.to_string()))
    }
}

impl From<&str> for ColorInput {
    /// Treat the string as hex; validation happens on normalization.
    ///
    /// Only hex is accepted here. Component strings such as `"255,0,0"` or
    /// `"rgb(255, 0, 0)"` must go through [`str::parse`] instead.
    fn from(s: &str) -> Self {
        ColorInput::Hex(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        ColorInput::Hex(s)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(rgb: [u8; 3]) -> Self {
        ColorInput::Rgb(rgb.map(f64::from))
    }
}

impl From<(u8, u8, u8)> for ColorInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorInput::from([r, g, b])
    }
}

impl From<[f64; 3]> for ColorInput {
    fn from(rgb: [f64; 3]) -> Self {
        ColorInput::Rgb(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(input: &ColorInput) -> FormatIssue {
        input
            .normalize()
            .expect_err("input should be rejected")
            .issue()
            .clone()
    }

    #[test]
    fn test_hex_with_and_without_hash() {
        let with = ColorInput::from("#FF8000").normalize().unwrap();
        let without = ColorInput::from("ff8000").normalize().unwrap();
        assert_eq!(with, without);
        assert_eq!(with, Srgb::from_u8(255, 128, 0));
    }

    #[test]
    fn test_hex_is_case_insensitive() {
        assert_eq!(
            ColorInput::from("#abcdef").normalize().unwrap(),
            ColorInput::from("#ABCDEF").normalize().unwrap()
        );
    }

    #[test]
    fn test_hex_length_errors() {
        assert_eq!(
            issue(&ColorInput::from("invalid")),
            FormatIssue::HexLength { len: 7 }
        );
        assert_eq!(issue(&ColorInput::from("")), FormatIssue::HexLength { len: 0 });
        assert_eq!(issue(&ColorInput::from("#")), FormatIssue::HexLength { len: 0 });
        assert_eq!(issue(&ColorInput::from("#F00")), FormatIssue::HexLength { len: 3 });
        assert_eq!(
            issue(&ColorInput::from("#FF000000")),
            FormatIssue::HexLength { len: 8 }
        );
    }

    #[test]
    fn test_only_one_hash_is_stripped() {
        assert_eq!(
            issue(&ColorInput::from("##FF0000")),
            FormatIssue::HexLength { len: 7 }
        );
    }

    #[test]
    fn test_hex_digit_errors() {
        assert_eq!(
            issue(&ColorInput::from("#GG0000")),
            FormatIssue::HexDigit {
                position: 0,
                found: 'G'
            }
        );
        // from_str_radix would accept a leading sign
        assert_eq!(
            issue(&ColorInput::from("+F0000")),
            FormatIssue::HexDigit {
                position: 0,
                found: '+'
            }
        );
        assert_eq!(
            issue(&ColorInput::from("FF 000")),
            FormatIssue::HexDigit {
                position: 2,
                found: ' '
            }
        );
    }

    #[test]
    fn test_multibyte_characters_do_not_panic() {
        // Six bytes, three chars
        assert_eq!(
            issue(&ColorInput::from("éééé"[..6].to_string())),
            FormatIssue::HexDigit {
                position: 0,
                found: 'é'
            }
        );
        assert_eq!(
            issue(&ColorInput::from("FFFFé")),
            FormatIssue::HexDigit {
                position: 4,
                found: 'é'
            }
        );
    }

    #[test]
    fn test_rgb_normalization() {
        let srgb = ColorInput::from([255u8, 0, 51]).normalize().unwrap();
        assert_eq!(srgb, Srgb::new(1.0, 0.0, 0.2));

        let fractional = ColorInput::Rgb([127.5, 0.0, 255.0]).normalize().unwrap();
        assert_eq!(fractional.r, 0.5);
    }

    #[test]
    fn test_rgb_range_errors() {
        assert_eq!(
            issue(&ColorInput::Rgb([256.0, 0.0, 0.0])),
            FormatIssue::ChannelRange {
                index: 0,
                value: 256.0
            }
        );
        assert_eq!(
            issue(&ColorInput::Rgb([0.0, -1.0, 0.0])),
            FormatIssue::ChannelRange {
                index: 1,
                value: -1.0
            }
        );
        assert!(matches!(
            issue(&ColorInput::Rgb([0.0, 0.0, f64::NAN])),
            FormatIssue::ChannelRange { index: 2, .. }
        ));
        assert!(ColorInput::Rgb([0.0, 0.0, f64::INFINITY])
            .normalize()
            .is_err());
    }

    #[test]
    fn test_from_components_arity() {
        let cases: [&[f64]; 4] = [&[], &[255.0], &[255.0, 0.0], &[1.0, 2.0, 3.0, 4.0]];
        for values in cases {
            let err = ColorInput::from_components(values).unwrap_err();
            assert_eq!(err.issue(), &FormatIssue::Arity { len: values.len() });
        }
        assert_eq!(
            ColorInput::from_components(&[1.0, 2.0, 3.0]).unwrap(),
            ColorInput::Rgb([1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn test_tuple_and_array_agree() {
        assert_eq!(ColorInput::from((1, 2, 3)), ColorInput::from([1u8, 2, 3]));
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(
            "#FF0000".parse::<ColorInput>().unwrap(),
            ColorInput::Hex("#FF0000".to_string())
        );
        assert_eq!(
            "  00ff00\n".parse::<ColorInput>().unwrap(),
            ColorInput::Hex("00ff00".to_string())
        );
    }

    #[test]
    fn test_parse_component_forms() {
        let expected = ColorInput::Rgb([255.0, 128.0, 0.0]);
        assert_eq!("255,128,0".parse::<ColorInput>().unwrap(), expected);
        assert_eq!("255, 128, 0".parse::<ColorInput>().unwrap(), expected);
        assert_eq!("255 128 0".parse::<ColorInput>().unwrap(), expected);
        assert_eq!("rgb(255, 128, 0)".parse::<ColorInput>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects() {
        let cases = [
            ("invalid", FormatIssue::HexLength { len: 7 }),
            ("", FormatIssue::HexLength { len: 0 }),
            ("255,0", FormatIssue::Arity { len: 2 }),
            ("rgb(1, 2, 3, 4)", FormatIssue::Arity { len: 4 }),
            ("rgb(1, 2, 3", FormatIssue::Unrecognized("rgb(1, 2, 3".to_string())),
            ("1, two, 3", FormatIssue::Unrecognized("two".to_string())),
        ];

        for (input, expected) in cases {
            let err = input.parse::<ColorInput>().unwrap_err();
            assert_eq!(err.issue(), &expected, "input {input:?}");
        }
    }

    #[test]
    fn test_from_str_slice_is_hex_only() {
        let converted = ColorInput::from("255,0,0");
        assert_eq!(converted, ColorInput::Hex("255,0,0".to_string()));
        assert_eq!(issue(&converted), FormatIssue::HexLength { len: 7 });

        let parsed: ColorInput = "255,0,0".parse().unwrap();
        assert_eq!(parsed, ColorInput::Rgb([255.0, 0.0, 0.0]));
        assert_eq!(parsed.normalize().unwrap(), Srgb::from_u8(255, 0, 0));
    }
}
