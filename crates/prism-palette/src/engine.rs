// ABOUTME: The palette engine: one editing session over a working palette
// ABOUTME: Owns live preview, contrast diagnostics, save/load/import/export, and generation

use crate::accessibility::{self, ContrastReport};
use crate::config::PaletteConfig;
use crate::document::{self, ExportedPalette};
use crate::error::Result;
use crate::generator;
use crate::library::PaletteLibrary;
use crate::store::KeyValueStore;
use crate::style::{SessionId, StyleTarget};
use chrono::Utc;
use prism_color::{is_valid_color, normalize};
use prism_logging::{debug, info, warn};
use prism_types::{ColorRole, Palette};
use std::sync::Arc;

/// Name used when saving with a blank name
pub const UNTITLED_PALETTE_NAME: &str = "Untitled Palette";

/// Whether the working palette has edits not captured by a save or load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Clean,
    Dirty,
}

#[derive(Debug)]
pub struct PaletteEngine {
    session: SessionId,
    config: PaletteConfig,
    default_palette: Palette,
    working: Palette,
    preview: bool,
    state: EditState,
    checks: ContrastReport,
    library: PaletteLibrary,
    target: Arc<dyn StyleTarget>,
}

impl PaletteEngine {
    /// Start a session over the saved list in `store`, writing to `target`
    pub fn new(
        config: PaletteConfig,
        store: Arc<dyn KeyValueStore>,
        target: Arc<dyn StyleTarget>,
    ) -> Self {
        let default_palette = Palette::builtin_default();
        let mut working = default_palette.clone();
        working.name = config.default_name.clone();

        let library = PaletteLibrary::open(store, config.storage_key.clone());
        let checks = accessibility::compute_contrast_checks(&working);
        let preview_on_start = config.preview_on_start;

        let mut engine = Self {
            session: SessionId::next(),
            config,
            default_palette,
            working,
            preview: false,
            state: EditState::Clean,
            checks,
            library,
            target,
        };

        info!(
            session = %engine.session,
            saved = engine.library.len(),
            storage_key = %engine.config.storage_key,
            "Palette engine started"
        );

        if preview_on_start {
            engine.set_preview(true);
        }
        engine
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    pub fn working(&self) -> &Palette {
        &self.working
    }

    pub fn default_palette(&self) -> &Palette {
        &self.default_palette
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == EditState::Dirty
    }

    pub fn is_preview_enabled(&self) -> bool {
        self.preview
    }

    /// Diagnostics for the working palette as of the last change
    pub fn contrast_checks(&self) -> &ContrastReport {
        &self.checks
    }

    pub fn saved_palettes(&self) -> &[Palette] {
        self.library.palettes()
    }

    /// Assign a color to one role.
    ///
    /// The value is stored in the role's canonical encoding; malformed input
    /// becomes the adapter's fallback rather than an error.
    pub fn set_color(&mut self, role: ColorRole, value: &str) {
        if !is_valid_color(value) {
            debug!(role = %role, value = %value, "Unparseable color, using fallback");
        }
        let canonical = normalize(value, role.canonical_encoding());
        debug!(role = %role, value = %canonical, "Color updated");

        self.working.colors.set(role, canonical);
        self.state = EditState::Dirty;
        self.after_working_change();
    }

    /// Write every role of `palette` to the style target.
    ///
    /// All style writes go through here.
    pub fn apply_palette(&self, palette: &Palette) {
        for (role, value) in palette.colors.iter() {
            let css_value = normalize(value, role.canonical_encoding());
            self.target
                .set_property(self.session, role.css_variable(), &css_value);
        }
        debug!(
            session = %self.session,
            palette_id = %palette.id,
            properties = palette.colors.len(),
            "Applied palette"
        );
    }

    pub fn compute_contrast_checks(&self, palette: &Palette) -> ContrastReport {
        accessibility::compute_contrast_checks(palette)
    }

    /// Snapshot the working colors into the saved list
    pub fn save(&mut self, name: &str) -> Result<Palette> {
        let name = match name.trim() {
            "" => UNTITLED_PALETTE_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };

        let snapshot = Palette {
            id: document::generate_id(),
            name: name.clone(),
            description: self.working.description.clone(),
            created_at: Utc::now(),
            colors: self.working.colors.clone(),
        };

        if let Err(e) = self.library.append(snapshot.clone()) {
            warn!(palette_name = %name, error = %e, "Failed to save palette");
            return Err(e);
        }

        self.working.name = name;
        self.state = EditState::Clean;
        info!(
            palette_id = %snapshot.id,
            palette_name = %snapshot.name,
            saved = self.library.len(),
            "Palette saved"
        );
        Ok(snapshot)
    }

    /// Make a copy of a saved palette the working palette.
    ///
    /// Looks the id up in the stored list as it is now. Unknown ids leave the
    /// session untouched.
    pub fn load(&mut self, id: &str) -> Option<Palette> {
        // Other sessions on the same store may have saved or deleted since
        self.library.reload();
        let Some(saved) = self.library.find(id).cloned() else {
            debug!(palette_id = %id, "No saved palette with this id");
            return None;
        };

        self.working = saved.clone();
        self.state = EditState::Clean;
        self.after_working_change();
        info!(
            palette_id = %saved.id,
            palette_name = %saved.name,
            weakest_contrast = accessibility::weakest_level(&self.checks).as_str(),
            "Palette loaded"
        );
        Some(saved)
    }

    /// Remove a saved palette; `Ok(false)` for an unknown id
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.library.remove(id)?;
        if removed {
            info!(palette_id = %id, saved = self.library.len(), "Palette deleted");
        } else {
            debug!(palette_id = %id, "No saved palette to delete");
        }
        Ok(removed)
    }

    pub fn rename(&mut self, name: &str) {
        self.working.name = name.trim().to_string();
    }

    pub fn export(&self) -> Result<ExportedPalette> {
        let exported = ExportedPalette::from_palette(&self.working)?;
        debug!(file_name = %exported.file_name, bytes = exported.content.len(), "Palette exported");
        Ok(exported)
    }

    /// Replace the working palette with an imported document.
    ///
    /// On error the working palette is unchanged.
    pub fn import(&mut self, content: &str) -> Result<Palette> {
        let palette = match document::parse_palette(content) {
            Ok(palette) => palette,
            Err(e) => {
                warn!(error = %e, "Palette import rejected");
                return Err(e);
            }
        };

        self.working = palette.clone();
        self.state = EditState::Dirty;
        self.after_working_change();
        info!(
            palette_id = %palette.id,
            palette_name = %palette.name,
            weakest_contrast = accessibility::weakest_level(&self.checks).as_str(),
            "Palette imported"
        );
        Ok(palette)
    }

    /// Regenerate brand and surface roles from a random base hue
    pub fn generate_random(&mut self, seed: Option<u64>) -> Palette {
        let hue = generator::random_base_hue(seed);
        self.working = generator::palette_from_base_hue(&self.working, hue);
        self.state = EditState::Dirty;
        self.after_working_change();
        info!(hue, seeded = seed.is_some(), "Generated palette");
        self.working.clone()
    }

    /// Back to the built-in default colors
    pub fn reset(&mut self) {
        let mut working = self.default_palette.clone();
        working.name = self.config.default_name.clone();
        self.working = working;
        self.state = EditState::Clean;
        self.after_working_change();
        debug!(session = %self.session, "Working palette reset");
    }

    /// Flip live preview, returning the new setting
    pub fn toggle_preview(&mut self) -> bool {
        self.set_preview(!self.preview);
        self.preview
    }

    /// Enable or disable live preview.
    ///
    /// Enabling applies the working palette. Disabling restores the default
    /// unless another session has written to the target since.
    pub fn set_preview(&mut self, enabled: bool) {
        if enabled == self.preview {
            return;
        }
        self.preview = enabled;

        if enabled {
            self.apply_palette(&self.working);
            info!(session = %self.session, "Live preview enabled");
            return;
        }

        match self.target.last_writer() {
            Some(writer) if writer != self.session => {
                info!(
                    session = %self.session,
                    last_writer = %writer,
                    "Live preview disabled, leaving styles owned by another session"
                );
            }
            _ => {
                self.apply_palette(&self.default_palette);
                info!(session = %self.session, "Live preview disabled, default restored");
            }
        }
    }

    fn after_working_change(&mut self) {
        if self.preview {
            self.apply_palette(&self.working);
        }
        self.checks = accessibility::compute_contrast_checks(&self.working);
    }
}
