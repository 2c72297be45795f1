// ABOUTME: Evenly sampled color ramps through a list of stops
// ABOUTME: Interpolates 8-bit sRGB channels linearly between neighbouring stops

use crate::rgb::Rgb;

/// Interpolate between two colors, `t` in `[0, 1]`
pub fn mix(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let (fr, fg, fb) = from.to_unit();
    let (tr, tg, tb) = to.to_unit();
    Rgb::from_unit(
        fr + (tr - fr) * t,
        fg + (tg - fg) * t,
        fb + (tb - fb) * t,
    )
}

/// Sample `count` evenly spaced colors along a ramp through `stops`.
///
/// The stops are spread evenly over `[0, 1]`; the first and last samples
/// are the first and last stops.
pub fn scale(stops: &[Rgb], count: usize) -> Vec<Rgb> {
    match (stops, count) {
        ([], _) | (_, 0) => Vec::new(),
        ([only], _) => vec![*only; count],
        (_, 1) => vec![stops[0]],
        _ => {
            let segments = (stops.len() - 1) as f64;
            (0..count)
                .map(|i| {
                    let t = i as f64 / (count - 1) as f64;
                    let position = t * segments;
                    let index = (position.floor() as usize).min(stops.len() - 2);
                    mix(stops[index], stops[index + 1], position - index as f64)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(110, 220, 130);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Rgb::new(60, 120, 80));
    }

    #[test]
    fn test_scale_hits_stops() {
        let mid = Rgb::new(0x26, 0x73, 0xd9);
        let ramp = scale(&[Rgb::WHITE, mid, Rgb::BLACK], 11);

        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp[0], Rgb::WHITE);
        assert_eq!(ramp[5], mid);
        assert_eq!(ramp[10], Rgb::BLACK);
    }

    #[test]
    fn test_scale_is_monotonic_in_lightness() {
        let mid = Rgb::new(0x26, 0x73, 0xd9);
        let ramp = scale(&[Rgb::WHITE, mid, Rgb::BLACK], 10);
        let luminance: Vec<f64> = ramp
            .iter()
            .map(|c| crate::contrast::relative_luminance(*c))
            .collect();
        assert!(luminance.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(scale(&[], 5).is_empty());
        assert!(scale(&[Rgb::WHITE, Rgb::BLACK], 0).is_empty());
        assert_eq!(scale(&[Rgb::WHITE], 3), vec![Rgb::WHITE; 3]);
        assert_eq!(scale(&[Rgb::WHITE, Rgb::BLACK], 1), vec![Rgb::WHITE]);
    }
}
