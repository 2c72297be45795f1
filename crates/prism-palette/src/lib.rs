// ABOUTME: Palette engine crate: working palette, live preview, diagnostics, persistence
// ABOUTME: Talks to the outside world only through KeyValueStore and StyleTarget

pub mod accessibility;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod generator;
pub mod library;
pub mod store;
pub mod style;

#[cfg(test)]
mod tests;

pub use accessibility::{
    CONTRAST_PAIRS, ContrastPair, ContrastReport, check_colors, compute_contrast_checks,
    failing_pairs, weakest_level,
};
pub use config::{DEFAULT_STORAGE_KEY, DEFAULT_WORKING_NAME, PaletteConfig};
pub use document::{
    ExportedPalette, IMPORTED_PALETTE_NAME, export_file_name, parse_palette,
};
pub use engine::{EditState, PaletteEngine, UNTITLED_PALETTE_NAME};
pub use error::{PaletteError, Result};
pub use generator::{generate_random_palette, palette_from_base_hue, random_base_hue};
pub use library::PaletteLibrary;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use style::{DocumentStyle, SessionId, StyleTarget};

// Types callers need alongside the engine
pub use prism_types::{ColorRole, ContrastCheck, ContrastLevel, Palette};
