// ABOUTME: HSL color model and the bare "H S% L%" triplet used by CSS variables
// ABOUTME: Conversions to and from 8-bit sRGB

use crate::rgb::Rgb;

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Achromatic colors get hue 0
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let l = (max + min) * 0.5;
        let d = max - min;
        if d.abs() < 1e-9 {
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } * 60.0;

        Self::new(h, s, l)
    }

    pub fn to_rgb(self) -> Rgb {
        if self.s <= 0.0 {
            return Rgb::from_unit(self.l, self.l, self.l);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let h = self.h / 360.0;

        Rgb::from_unit(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }

    /// Parse `"H S% L%"`.
    ///
    /// The `%` signs are optional and commas count as separators. Hue wraps,
    /// saturation and lightness clamp to `[0, 100]`.
    pub fn parse_triplet(input: &str) -> Option<Self> {
        let mut parts = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty());

        let h = parse_component(parts.next()?, false)?;
        let s = parse_component(parts.next()?, true)?;
        let l = parse_component(parts.next()?, true)?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(h, s / 100.0, l / 100.0))
    }

    /// Format as `"H S% L%"` with integer components.
    ///
    /// A hue that rounds to 360 is written as 0.
    pub fn to_triplet(self) -> String {
        let (h, s, l) = self.rounded();
        format!("{h} {s}% {l}%")
    }

    /// Components rounded to integer degrees and percent
    pub fn rounded(self) -> (u16, u8, u8) {
        let h = self.h.round() as u16 % 360;
        let s = (self.s * 100.0).round() as u8;
        let l = (self.l * 100.0).round() as u8;
        (h, s, l)
    }
}

fn parse_component(raw: &str, percent: bool) -> Option<f64> {
    let raw = if percent {
        raw.strip_suffix('%').unwrap_or(raw)
    } else {
        raw.strip_suffix("deg").unwrap_or(raw)
    };
    let value: f64 = raw.parse().ok()?;
    value.is_finite().then_some(value)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
