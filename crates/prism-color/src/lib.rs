// ABOUTME: Color model adapter: parsing, encoding conversion, and contrast measurement
// ABOUTME: Stateless and side-effect free; safe to call on every keystroke

pub mod contrast;
pub mod convert;
pub mod hsl;
pub mod lab;
pub mod rgb;
pub mod scale;

pub use contrast::{contrast_ratio, relative_luminance};
pub use convert::{
    FALLBACK_HEX, FALLBACK_HSL_TRIPLET, contrast, hex_to_hsl_triplet, hsl_triplet_to_hex,
    is_valid_color, normalize, parse_color,
};
pub use hsl::Hsl;
pub use lab::{Lab, darken};
pub use rgb::Rgb;
pub use scale::{mix, scale};
