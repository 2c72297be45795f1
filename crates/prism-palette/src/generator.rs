// ABOUTME: Random palette generation from a single base hue
// ABOUTME: Brand and surface roles come from a white-to-hue-to-black ramp; other roles are kept

use prism_color::{Hsl, Rgb, darken, normalize, scale};
use prism_types::{ColorRole, Palette};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RAMP_LEN: usize = 10;

/// Pick a base hue in `[0, 360)`, reproducibly when seeded
pub fn random_base_hue(seed: Option<u64>) -> f64 {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed).gen_range(0.0..360.0),
        None => rand::thread_rng().gen_range(0.0..360.0),
    }
}

/// Derive a palette from `base` around `hue` (degrees).
///
/// The result keeps `base`'s identity and every role the ramp does not cover.
pub fn palette_from_base_hue(base: &Palette, hue: f64) -> Palette {
    let anchor = Hsl::new(hue, 0.7, 0.5).to_rgb();
    let ramp = scale(&[Rgb::WHITE, anchor, Rgb::BLACK], RAMP_LEN);
    let highlight = Hsl::new(hue + 60.0, 0.8, 0.6).to_rgb();

    let assignments = [
        (ColorRole::Primary, ramp[7]),
        (ColorRole::PrimaryHover, darken(ramp[7], 0.5)),
        (ColorRole::PrimaryActive, darken(ramp[7], 1.0)),
        (ColorRole::Secondary, ramp[5]),
        (ColorRole::SecondaryHover, darken(ramp[5], 0.5)),
        (ColorRole::Background, ramp[1]),
        (ColorRole::CardBackground, ramp[2]),
        (ColorRole::HeaderBackground, ramp[1]),
        (ColorRole::Link, ramp[7]),
        (ColorRole::LinkHover, darken(ramp[7], 0.5)),
        (ColorRole::HighlightColor, highlight),
    ];

    let mut palette = base.clone();
    for (role, rgb) in assignments {
        palette
            .colors
            .set(role, normalize(&rgb.to_hex(), role.canonical_encoding()));
    }
    palette
}

pub fn generate_random_palette(base: &Palette, seed: Option<u64>) -> Palette {
    palette_from_base_hue(base, random_base_hue(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_color::{hex_to_hsl_triplet, parse_color, relative_luminance};
    use prism_types::ColorEncoding;

    fn luminance(value: &str) -> f64 {
        relative_luminance(parse_color(value).unwrap())
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let base = Palette::builtin_default();
        assert_eq!(
            generate_random_palette(&base, Some(42)),
            generate_random_palette(&base, Some(42))
        );

        let hue = random_base_hue(Some(7));
        assert!((0.0..360.0).contains(&hue));
        assert_eq!(hue, random_base_hue(Some(7)));
        assert_ne!(random_base_hue(Some(1)), random_base_hue(Some(2)));
    }

    #[test]
    fn test_red_base_hue() {
        let base = Palette::builtin_default();
        let palette = palette_from_base_hue(&base, 0.0);

        assert!(palette.color(ColorRole::Primary).starts_with("0 "));
        assert_eq!(
            hex_to_hsl_triplet(palette.color(ColorRole::HighlightColor)),
            "60 80% 60%"
        );
        assert_eq!(
            palette.color(ColorRole::Background),
            palette_from_base_hue(&base, 360.0).color(ColorRole::Background)
        );
    }

    #[test]
    fn test_canonical_encodings() {
        let palette = palette_from_base_hue(&Palette::builtin_default(), 200.0);
        for role in ColorRole::ALL {
            let value = palette.color(role);
            match role.canonical_encoding() {
                ColorEncoding::Hex => assert!(value.starts_with('#'), "{role}: {value}"),
                ColorEncoding::HslTriplet => assert!(value.ends_with('%'), "{role}: {value}"),
            }
        }
    }

    #[test]
    fn test_ramp_ordering() {
        let palette = palette_from_base_hue(&Palette::builtin_default(), 140.0);

        let primary = luminance(palette.color(ColorRole::Primary));
        let hover = luminance(palette.color(ColorRole::PrimaryHover));
        let active = luminance(palette.color(ColorRole::PrimaryActive));
        assert!(active < hover && hover < primary);

        let background = luminance(palette.color(ColorRole::Background));
        let card = luminance(palette.color(ColorRole::CardBackground));
        let secondary = luminance(palette.color(ColorRole::Secondary));
        assert!(background > card && card > secondary && secondary > primary);

        assert_eq!(
            normalize(palette.color(ColorRole::Link), ColorEncoding::HslTriplet),
            palette.color(ColorRole::Primary)
        );
    }

    #[test]
    fn test_untouched_roles_and_identity_are_kept() {
        let mut base = Palette::builtin_default();
        base.name = "Working".to_string();
        base.colors.set(ColorRole::TextPrimary, "#123456");

        let palette = palette_from_base_hue(&base, 45.0);
        assert_eq!(palette.id, base.id);
        assert_eq!(palette.name, "Working");
        assert_eq!(palette.color(ColorRole::TextPrimary), "#123456");
        assert_eq!(palette.color(ColorRole::Success), base.color(ColorRole::Success));
        assert_ne!(palette.color(ColorRole::Primary), base.color(ColorRole::Primary));
    }
}
