// ABOUTME: WCAG 2.1 relative luminance and contrast ratio
// ABOUTME: Ratios are symmetric and range from 1 (identical) to 21 (black on white)

use crate::rgb::Rgb;

/// Linearize one sRGB channel in `[0, 1]`
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.to_unit();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Contrast ratio between two colors, independent of argument order
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
