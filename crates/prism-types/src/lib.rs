// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other prism crates

pub mod contrast;
pub mod palette;
pub mod role;

// Re-export commonly used types
pub use contrast::{ContrastCheck, ContrastLevel, ContrastRatios};
pub use palette::{
    ColorSet, DEFAULT_PALETTE_ID, DEFAULT_PALETTE_NAME, Palette, default_color,
};
pub use role::{ColorEncoding, ColorRole};
