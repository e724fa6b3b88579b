//! 8-bit RGB color type.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An 8-bit RGB color.
///
/// Used for theme colors, ink colors and source pixel samples. Alpha is not
/// stored: mark opacity is a property of the mark, not of its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure white, the paper color of every output surface.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read the RGB part of pixel `index` from an interleaved RGBA buffer.
    ///
    /// Returns `None` if the pixel lies outside the buffer.
    #[inline]
    pub fn from_rgba_pixel(rgba: &[u8], index: usize) -> Option<Self> {
        let p = index.checked_mul(4)?;
        let px = rgba.get(p..p + 3)?;
        Some(Self::new(px[0], px[1], px[2]))
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex, with or without hash
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (each digit is doubled)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    /// Anything else is rejected rather than defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tone_dither::Rgb;
    ///
    /// let white: Rgb = "#fff".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    ///
    /// let brick: Rgb = "c74634".parse().unwrap();
    /// assert_eq!(brick, Rgb::new(199, 70, 52));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Validate before slicing: from_str_radix accepts a leading '+',
        // and multi-byte chars would split on non-char boundaries.
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(c));
        }

        let digits: Vec<u8> = s.bytes().map(hex_value).collect();
        match digits.as_slice() {
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                r1 * 16 + r0,
                g1 * 16 + g0,
                b1 * 16 + b0,
            )),
            other => Err(ParseColorError::InvalidLength(other.len())),
        }
    }
}

/// Value of a single ASCII hex digit. Caller guarantees `is_ascii_hexdigit`.
#[inline]
fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        _ => byte - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_white() {
        let short: Rgb = "#fff".parse().unwrap();
        let long: Rgb = "#ffffff".parse().unwrap();
        assert_eq!(short, Rgb::WHITE);
        assert_eq!(long, Rgb::WHITE);
    }

    #[test]
    fn test_parse_without_hash() {
        let color: Rgb = "c74634".parse().unwrap();
        assert_eq!(color, Rgb::new(199, 70, 52));
    }

    #[test]
    fn test_parse_shorthand_expands_digits() {
        let color: Rgb = "#F80".parse().unwrap();
        assert_eq!(color, Rgb::new(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_case_insensitive_and_trimmed() {
        let upper: Rgb = "  #C74634 ".parse().unwrap();
        let lower: Rgb = "#c74634".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!(
            "#ffff".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(4))
        );
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("#".parse::<Rgb>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!(
            "#1234567".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength(7))
        );
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert_eq!(
            "#ggg".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit('g'))
        );
        // from_str_radix would accept the sign
        assert_eq!(
            "+fffff".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit('+'))
        );
        assert_eq!(
            "#é12".parse::<Rgb>(),
            Err(ParseColorError::InvalidDigit('é'))
        );
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(199, 70, 52).to_hex(), "#c74634");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_from_rgba_pixel() {
        let rgba = [1, 2, 3, 255, 10, 20, 30, 0];
        assert_eq!(Rgb::from_rgba_pixel(&rgba, 0), Some(Rgb::new(1, 2, 3)));
        assert_eq!(Rgb::from_rgba_pixel(&rgba, 1), Some(Rgb::new(10, 20, 30)));
        assert_eq!(Rgb::from_rgba_pixel(&rgba, 2), None);
    }
}
