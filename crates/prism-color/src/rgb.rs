// ABOUTME: 8-bit sRGB color and hex string parsing/formatting
// ABOUTME: Accepts #RRGGBB and #RGB (case-insensitive, leading # optional)

use std::fmt;

/// An opaque 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unit-range channels, clamping and rounding each one
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    /// Channels scaled to `[0, 1]`
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Parse `#RRGGBB` or `#RGB`
    pub fn parse_hex(input: &str) -> Option<Self> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            6 => Some(Self::new(
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
            )),
            3 => {
                let mut channels = digits.chars().map(|c| {
                    let nibble = c.to_digit(16).unwrap_or(0) as u8;
                    nibble << 4 | nibble
                });
                Some(Self::new(channels.next()?, channels.next()?, channels.next()?))
            }
            _ => None,
        }
    }

    /// Lower-case `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn unit_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(Rgb::parse_hex("#3b82f6"), Some(Rgb::new(0x3b, 0x82, 0xf6)));
        assert_eq!(Rgb::parse_hex("#3B82F6"), Some(Rgb::new(0x3b, 0x82, 0xf6)));
        assert_eq!(Rgb::parse_hex("3b82f6"), Some(Rgb::new(0x3b, 0x82, 0xf6)));
        assert_eq!(Rgb::parse_hex("#fa0"), Some(Rgb::new(0xff, 0xaa, 0x00)));
        assert_eq!(Rgb::parse_hex("  #000  "), Some(Rgb::BLACK));
    }

    #[test]
    fn test_rejects_partial_input() {
        for input in ["", "#", "#3b", "#3b82", "#3b82f", "#3b82f6a", "#gg0000", "#+1a2b3", "red"] {
            assert_eq!(Rgb::parse_hex(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_to_hex_is_lower_case() {
        assert_eq!(Rgb::new(255, 0, 171).to_hex(), "#ff00ab");
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_from_unit_clamps() {
        assert_eq!(Rgb::from_unit(1.2, -0.5, 0.5), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::from_unit(f64::NAN, 0.0, 0.0), Rgb::BLACK);
    }
}
