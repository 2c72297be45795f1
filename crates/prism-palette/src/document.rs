// ABOUTME: Palette JSON documents: export, tolerant import with backfill, id allocation
// ABOUTME: Imports and stored list entries share one validate-and-backfill path

use crate::error::{PaletteError, Result};
use chrono::{DateTime, Utc};
use prism_color::is_valid_color;
use prism_types::{ColorRole, ColorSet, Palette, default_color};
use rand::Rng;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Component, Path, PathBuf};

/// Name given to imported documents that carry none
pub const IMPORTED_PALETTE_NAME: &str = "Imported Palette";

/// Wire shape accepted on import. Only `colors` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaletteDocument {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    colors: Map<String, Value>,
}

/// A palette serialized for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPalette {
    pub file_name: String,
    pub content: String,
}

impl ExportedPalette {
    pub fn from_palette(palette: &Palette) -> Result<Self> {
        Ok(Self {
            file_name: export_file_name(&palette.name),
            content: to_pretty_json(palette)?,
        })
    }

    /// Write the document into `dir` under its file name.
    ///
    /// The name must be a single plain file name; anything that would
    /// resolve outside `dir` is refused before touching the filesystem.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let mut components = Path::new(&self.file_name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            return Err(PaletteError::storage(
                self.file_name.clone(),
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "export file name is not a plain file name",
                ),
            ));
        }
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content)
            .map_err(|e| PaletteError::storage(self.file_name.clone(), e))?;
        Ok(path)
    }
}

/// `"Ocean Breeze"` becomes `"ocean-breeze-palette.json"`.
///
/// Path separators and control characters turn into `-` and leading dots
/// are dropped, so the result is always one file name.
pub fn export_file_name(name: &str) -> String {
    let slug: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let slug = slug.trim_start_matches(['.', '-']);
    if slug.is_empty() {
        "untitled-palette.json".to_string()
    } else {
        format!("{slug}-palette.json")
    }
}

pub fn to_pretty_json(palette: &Palette) -> Result<String> {
    serde_json::to_string_pretty(palette).map_err(PaletteError::Serialize)
}

/// Parse an import document, backfilling anything unusable
pub fn parse_palette(content: &str) -> Result<Palette> {
    let document: PaletteDocument =
        serde_json::from_str(content).map_err(PaletteError::from_json)?;
    Ok(from_document(document))
}

/// Same as [`parse_palette`] for an already-decoded JSON value
pub fn palette_from_value(value: Value) -> Result<Palette> {
    let document: PaletteDocument =
        serde_json::from_value(value).map_err(PaletteError::from_json)?;
    Ok(from_document(document))
}

fn from_document(document: PaletteDocument) -> Palette {
    let id = match document.id {
        Some(Value::String(id)) if !id.trim().is_empty() => id,
        Some(Value::Number(n)) => n.to_string(),
        _ => generate_id(),
    };

    let name = document
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| IMPORTED_PALETTE_NAME.to_string());

    let created_at = document
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let colors = backfill_colors(&document.colors);

    let ignored = document
        .colors
        .keys()
        .filter(|key| ColorRole::from_key(key).is_none())
        .count();
    if ignored > 0 {
        prism_logging::debug!(
            palette_id = %id,
            ignored,
            "Ignored unknown color roles in palette document"
        );
    }

    Palette {
        id,
        name,
        description: document.description,
        created_at,
        colors,
    }
}

fn backfill_colors(colors: &Map<String, Value>) -> ColorSet {
    ColorSet::from_fn(|role| match colors.get(role.key()) {
        Some(Value::String(value)) if is_valid_color(value) => value.trim().to_string(),
        Some(other) => {
            prism_logging::debug!(
                role = %role,
                value = %other,
                "Replaced unusable color with default"
            );
            default_color(role).to_string()
        }
        None => default_color(role).to_string(),
    })
}

/// Time-ordered palette id with a random suffix
pub fn generate_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..0x1_0000);
    format!("{}-{suffix:04x}", Utc::now().timestamp_millis())
}
