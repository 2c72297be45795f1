// ABOUTME: Palette engine configuration loaded from TOML with environment overrides
// ABOUTME: Controls the storage namespace, preview-on-start, and the on-disk store location

use crate::error::{PaletteError, Result};
use crate::store::FileStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Store key holding the saved palette list
pub const DEFAULT_STORAGE_KEY: &str = "gallery-palettes";

/// Name given to the working palette of a fresh session
pub const DEFAULT_WORKING_NAME: &str = "My Custom Theme";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Namespace key for the persisted palette list
    pub storage_key: String,

    /// Enable live preview as soon as the engine is created
    pub preview_on_start: bool,

    /// Display name for the working palette of a new session
    pub default_name: String,

    /// Directory for [`FileStore`]; platform data dir when unset
    pub store_dir: Option<PathBuf>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            preview_on_start: false,
            default_name: DEFAULT_WORKING_NAME.to_string(),
            store_dir: None,
        }
    }
}

impl PaletteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PaletteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `PRISM_PALETTE_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("PRISM_PALETTE_KEY") {
            self.storage_key = key.trim().to_string();
        }

        if let Some(preview) = lookup("PRISM_PALETTE_PREVIEW") {
            self.preview_on_start = parse_flag(&preview).ok_or_else(|| {
                PaletteError::config(format!("PRISM_PALETTE_PREVIEW: expected a boolean, got '{preview}'"))
            })?;
        }

        if let Some(dir) = lookup("PRISM_PALETTE_DIR") {
            if !dir.trim().is_empty() {
                self.store_dir = Some(PathBuf::from(dir.trim()));
            }
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(PaletteError::config("storage_key must not be empty"));
        }
        Ok(())
    }

    /// Directory the file-backed store writes into
    pub fn resolved_store_dir(&self) -> PathBuf {
        match &self.store_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join("prism"))
                .unwrap_or_else(|| PathBuf::from(".prism")),
        }
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.resolved_store_dir())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PaletteConfig::default();
        assert_eq!(config.storage_key, "gallery-palettes");
        assert!(!config.preview_on_start);
        assert_eq!(config.default_name, "My Custom Theme");
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PaletteConfig::from_toml_str(
            r#"
preview_on_start = true
store_dir = "/tmp/prism-palettes"
"#,
        )
        .unwrap();

        assert!(config.preview_on_start);
        assert_eq!(config.store_dir, Some(PathBuf::from("/tmp/prism-palettes")));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.default_name, DEFAULT_WORKING_NAME);
        assert_eq!(config.resolved_store_dir(), PathBuf::from("/tmp/prism-palettes"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = PaletteConfig::from_toml_str("preview_on_start = \"sometimes").unwrap_err();
        assert!(matches!(err, PaletteError::ConfigParse(_)));

        let err = PaletteConfig::from_toml_str("storage_key = \"  \"").unwrap_err();
        assert!(matches!(err, PaletteError::Config { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.toml");
        std::fs::write(&path, "storage_key = \"gallery-color-palettes\"\n").unwrap();

        let config = PaletteConfig::from_file(&path).unwrap();
        assert_eq!(config.storage_key, "gallery-color-palettes");

        let missing = PaletteConfig::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, PaletteError::ConfigRead { .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = PaletteConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("PRISM_PALETTE_KEY", "team-palettes"),
                ("PRISM_PALETTE_PREVIEW", "on"),
                ("PRISM_PALETTE_DIR", "/var/lib/prism"),
            ]))
            .unwrap();

        assert_eq!(config.storage_key, "team-palettes");
        assert!(config.preview_on_start);
        assert_eq!(config.store_dir, Some(PathBuf::from("/var/lib/prism")));
    }

    #[test]
    fn test_bad_overrides() {
        let mut config = PaletteConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[("PRISM_PALETTE_PREVIEW", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("PRISM_PALETTE_PREVIEW"));

        let mut config = PaletteConfig::default();
        assert!(config
            .apply_overrides(lookup_from(&[("PRISM_PALETTE_KEY", "")]))
            .is_err());
    }

    #[test]
    fn test_no_overrides_is_noop() {
        let mut config = PaletteConfig::default();
        config.apply_overrides(lookup_from(&[])).unwrap();
        assert_eq!(config, PaletteConfig::default());
    }
}
