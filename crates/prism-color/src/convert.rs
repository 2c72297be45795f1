// ABOUTME: Best-effort conversions between the hex and HSL-triplet color encodings
// ABOUTME: Malformed input never errors; it maps to a documented fallback value

use crate::contrast::contrast_ratio;
use crate::hsl::Hsl;
use crate::rgb::Rgb;
use prism_types::ColorEncoding;

/// Returned by [`hex_to_hsl_triplet`] for input that is not a hex color
pub const FALLBACK_HSL_TRIPLET: &str = "220 85% 50%";

/// Returned by [`hsl_triplet_to_hex`] for input that is not an HSL triplet
pub const FALLBACK_HEX: &str = "#3b82f6";

/// Parse a color written in either encoding
pub fn parse_color(value: &str) -> Option<Rgb> {
    Rgb::parse_hex(value).or_else(|| Hsl::parse_triplet(value).map(Hsl::to_rgb))
}

/// Whether `value` parses in either encoding
pub fn is_valid_color(value: &str) -> bool {
    parse_color(value).is_some()
}

/// `#RRGGBB` / `#RGB` to `"H S% L%"`
pub fn hex_to_hsl_triplet(hex: &str) -> String {
    match Rgb::parse_hex(hex) {
        Some(rgb) => Hsl::from_rgb(rgb).to_triplet(),
        None => FALLBACK_HSL_TRIPLET.to_string(),
    }
}

/// `"H S% L%"` to lower-case `#rrggbb`
pub fn hsl_triplet_to_hex(triplet: &str) -> String {
    match Hsl::parse_triplet(triplet) {
        Some(hsl) => hsl.to_rgb().to_hex(),
        None => FALLBACK_HEX.to_string(),
    }
}

/// Rewrite a color in either encoding into `encoding`.
///
/// Input already in the target encoding is re-formatted canonically (so
/// `#ABC` becomes `#aabbcc`). Unparseable input yields the fallback for the
/// target encoding.
pub fn normalize(value: &str, encoding: ColorEncoding) -> String {
    match (encoding, parse_color(value)) {
        (ColorEncoding::Hex, Some(rgb)) => rgb.to_hex(),
        (ColorEncoding::Hex, None) => FALLBACK_HEX.to_string(),
        (ColorEncoding::HslTriplet, None) => FALLBACK_HSL_TRIPLET.to_string(),
        (ColorEncoding::HslTriplet, Some(rgb)) => match Hsl::parse_triplet(value) {
            // Keep triplet input as written, modulo rounding, instead of
            // pushing it through 8-bit sRGB
            Some(hsl) => hsl.to_triplet(),
            None => Hsl::from_rgb(rgb).to_triplet(),
        },
    }
}

/// WCAG contrast ratio between two colors in either encoding.
///
/// Returns `0.0` when either side does not parse, which classifies as a
/// failing pair.
pub fn contrast(foreground: &str, background: &str) -> f64 {
    match (parse_color(foreground), parse_color(background)) {
        (Some(fg), Some(bg)) => contrast_ratio(fg, bg),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(triplet: &str) -> (i32, i32, i32) {
        let (h, s, l) = Hsl::parse_triplet(triplet).unwrap().rounded();
        (i32::from(h), i32::from(s), i32::from(l))
    }

    fn hue_distance(a: i32, b: i32) -> i32 {
        let d = (a - b).rem_euclid(360);
        d.min(360 - d)
    }

    #[test]
    fn test_hex_to_hsl_triplet() {
        assert_eq!(hex_to_hsl_triplet("#ff00ff"), "300 100% 50%");
        assert_eq!(hex_to_hsl_triplet("#3b82f6"), "217 91% 60%");
        assert_eq!(hex_to_hsl_triplet("#fff"), "0 0% 100%");
        assert_eq!(hex_to_hsl_triplet("#000000"), "0 0% 0%");
    }

    #[test]
    fn test_hsl_triplet_to_hex() {
        assert_eq!(hsl_triplet_to_hex("300 100% 50%"), "#ff00ff");
        assert_eq!(hsl_triplet_to_hex("0 0% 100%"), "#ffffff");
        assert_eq!(hsl_triplet_to_hex("120 100% 25%"), "#008000");
    }

    #[test]
    fn test_malformed_input_falls_back() {
        for partial in ["", "#", "#3b", "#3b82", "#3b82f", "not a color", "217 91% 60%"] {
            assert_eq!(hex_to_hsl_triplet(partial), FALLBACK_HSL_TRIPLET, "{partial:?}");
        }
        assert_eq!(hsl_triplet_to_hex("220 85%"), FALLBACK_HEX);
        assert_eq!(hsl_triplet_to_hex("#3b82f6"), FALLBACK_HEX);
        assert_eq!(hsl_triplet_to_hex("x y z"), FALLBACK_HEX);
    }

    /// Integer degrees and percent cannot resolve hue or saturation for
    /// near-gray colors, so the per-component bound holds only above a small
    /// channel spread. Lightness and hex channels stay close for every color.
    #[test]
    fn test_round_trip_sweep() {
        const MIN_RESOLVABLE_SPREAD: u8 = 40;

        for value in (0u32..0x100_0000).step_by(97) {
            let hex = format!("#{value:06x}");
            let rgb = Rgb::parse_hex(&hex).unwrap();

            let first = hex_to_hsl_triplet(&hex);
            let back = hsl_triplet_to_hex(&first);
            let second = hex_to_hsl_triplet(&back);
            let (h1, s1, l1) = components(&first);
            let (h2, s2, l2) = components(&second);

            assert!((l1 - l2).abs() <= 1, "{hex}: {first} vs {second}");

            let restored = Rgb::parse_hex(&back).unwrap();
            for (a, b) in [(rgb.r, restored.r), (rgb.g, restored.g), (rgb.b, restored.b)] {
                assert!(a.abs_diff(b) <= 6, "{hex} -> {back}");
            }

            let spread = rgb.r.max(rgb.g).max(rgb.b) - rgb.r.min(rgb.g).min(rgb.b);
            if spread >= MIN_RESOLVABLE_SPREAD {
                assert!(hue_distance(h1, h2) <= 1, "{hex}: {first} vs {second}");
                assert!((s1 - s2).abs() <= 1, "{hex}: {first} vs {second}");
            }
        }
    }

    #[test]
    fn test_round_trip_within_one_unit() {
        for hex in [
            "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ff00ff", "#ff0000",
            "#808080", "#ffffff", "#000000",
        ] {
            let first = hex_to_hsl_triplet(hex);
            let back = hsl_triplet_to_hex(&first);
            let second = hex_to_hsl_triplet(&back);

            let (h1, s1, l1) = components(&first);
            let (h2, s2, l2) = components(&second);
            assert!(hue_distance(h1, h2) <= 1, "{hex}: {first} vs {second}");
            assert!((s1 - s2).abs() <= 1, "{hex}: {first} vs {second}");
            assert!((l1 - l2).abs() <= 1, "{hex}: {first} vs {second}");

            let original = Rgb::parse_hex(hex).unwrap();
            let restored = Rgb::parse_hex(&back).unwrap();
            for (a, b) in [
                (original.r, restored.r),
                (original.g, restored.g),
                (original.b, restored.b),
            ] {
                assert!(a.abs_diff(b) <= 3, "{hex} -> {back}");
            }
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("#ABC", ColorEncoding::Hex), "#aabbcc");
        assert_eq!(normalize("300 100% 50%", ColorEncoding::Hex), "#ff00ff");
        assert_eq!(normalize("#ff00ff", ColorEncoding::HslTriplet), "300 100% 50%");
        assert_eq!(normalize("217.4 91.2 59.8", ColorEncoding::HslTriplet), "217 91% 60%");
        assert_eq!(normalize("#zz", ColorEncoding::Hex), FALLBACK_HEX);
        assert_eq!(normalize("#zz", ColorEncoding::HslTriplet), FALLBACK_HSL_TRIPLET);
    }

    #[test]
    fn test_contrast_accepts_both_encodings() {
        let hex = contrast("#ffffff", "#000000");
        let triplet = contrast("0 0% 100%", "0 0% 0%");
        assert!((hex - 21.0).abs() < 1e-9);
        assert!((triplet - 21.0).abs() < 1e-9);
        assert!((contrast("#ffffff", "0 0% 0%") - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_symmetry_and_bounds() {
        let samples = [
            "#ffffff", "#000000", "#777777", "#888888", "#3b82f6", "217 91% 60%", "#fbbf24",
            "215 16% 47%", "#0f172a",
        ];
        for a in samples {
            for b in samples {
                let ab = contrast(a, b);
                let ba = contrast(b, a);
                assert_eq!(ab, ba, "{a} / {b}");
                assert!((1.0..=21.0 + 1e-9).contains(&ab), "{a} / {b}: {ab}");
            }
        }
    }

    #[test]
    fn test_contrast_unparseable_is_zero() {
        assert_eq!(contrast("#ffffff", "nope"), 0.0);
        assert_eq!(contrast("", "#000000"), 0.0);
        assert_eq!(contrast("#12", "#34"), 0.0);
    }
}
