// ABOUTME: CIE L*a*b* (D65) conversion used for perceptual darkening
// ABOUTME: Darken steps subtract a fixed L* amount per unit, matching common color libraries

use crate::contrast::srgb_to_linear;
use crate::rgb::Rgb;

/// L* units removed per unit of darken amount
pub const DARKEN_STEP: f64 = 18.0;

// D65 reference white
const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;

const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// A CIE L*a*b* color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        let (r, g, b) = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));

        let x = xyz_to_lab((0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / XN);
        let y = xyz_to_lab((0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / YN);
        let z = xyz_to_lab((0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / ZN);

        Self {
            l: 116.0 * y - 16.0,
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }

    /// Convert back to sRGB, clipping out-of-gamut channels
    pub fn to_rgb(self) -> Rgb {
        let y = (self.l + 16.0) / 116.0;
        let x = y + self.a / 500.0;
        let z = y - self.b / 200.0;

        let x = XN * lab_to_xyz(x);
        let y = YN * lab_to_xyz(y);
        let z = ZN * lab_to_xyz(z);

        Rgb::from_unit(
            linear_to_srgb(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
            linear_to_srgb(-0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z),
            linear_to_srgb(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
        )
    }
}

/// Darken by `amount` steps of [`DARKEN_STEP`] L* units
pub fn darken(rgb: Rgb, amount: f64) -> Rgb {
    let mut lab = Lab::from_rgb(rgb);
    lab.l -= DARKEN_STEP * amount;
    lab.to_rgb()
}

fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

fn lab_to_xyz(t: f64) -> f64 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        let white = Lab::from_rgb(Rgb::WHITE);
        assert!((white.l - 100.0).abs() < 0.01);
        assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);

        let black = Lab::from_rgb(Rgb::BLACK);
        assert!(black.l.abs() < 0.01);
    }

    #[test]
    fn test_round_trip_is_stable() {
        for rgb in [
            Rgb::new(0x3b, 0x82, 0xf6),
            Rgb::new(0x10, 0xb9, 0x81),
            Rgb::new(0xef, 0x44, 0x44),
            Rgb::new(0x12, 0x34, 0x56),
        ] {
            assert_eq!(Lab::from_rgb(rgb).to_rgb(), rgb);
        }
    }

    #[test]
    fn test_darken_lowers_lightness() {
        let base = Rgb::new(0x3b, 0x82, 0xf6);
        let hover = darken(base, 0.5);
        let active = darken(base, 1.0);

        let l_base = Lab::from_rgb(base).l;
        let l_hover = Lab::from_rgb(hover).l;
        let l_active = Lab::from_rgb(active).l;
        assert!(l_hover < l_base);
        assert!(l_active < l_hover);
        assert!((l_base - l_hover - 9.0).abs() < 1.5);
    }

    #[test]
    fn test_darken_black_stays_black() {
        assert_eq!(darken(Rgb::BLACK, 1.0), Rgb::BLACK);
    }
}
