// ABOUTME: Error types for palette persistence, import, and configuration
// ABOUTME: Every variant is recoverable; the working palette is never left half-updated

use serde_json::error::Category;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaletteError>;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Palette document is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Invalid palette document: {reason}")]
    InvalidDocument { reason: String },

    #[error("Failed to serialize palette data: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Storage error for '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

impl PaletteError {
    /// Classify a JSON decoding failure.
    ///
    /// Syntax problems mean the content is not JSON at all; data problems
    /// mean it is JSON of the wrong shape.
    pub fn from_json(error: serde_json::Error) -> Self {
        match error.classify() {
            Category::Data => Self::InvalidDocument {
                reason: error.to_string(),
            },
            Category::Syntax | Category::Eof | Category::Io => Self::MalformedJson(error),
        }
    }

    /// Create an invalid document error
    pub fn invalid_document<S: Into<String>>(reason: S) -> Self {
        Self::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Create a storage error for a store key or file name
    pub fn storage<S: Into<String>>(key: S, source: std::io::Error) -> Self {
        Self::Storage {
            key: key.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(reason: S) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Whether this error came from reading a palette document
    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::MalformedJson(_) | Self::InvalidDocument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        assert!(matches!(
            PaletteError::from_json(syntax),
            PaletteError::MalformedJson(_)
        ));

        let eof = serde_json::from_str::<serde_json::Value>("{\"colors\": {").unwrap_err();
        assert!(matches!(
            PaletteError::from_json(eof),
            PaletteError::MalformedJson(_)
        ));

        let data = serde_json::from_str::<Vec<String>>("{}").unwrap_err();
        assert!(matches!(
            PaletteError::from_json(data),
            PaletteError::InvalidDocument { .. }
        ));
    }

    #[test]
    fn test_error_properties() {
        assert!(PaletteError::invalid_document("missing colors").is_document_error());

        let storage = PaletteError::storage(
            "gallery-palettes",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        );
        assert!(!storage.is_document_error());
        assert!(storage.to_string().contains("gallery-palettes"));

        assert!(PaletteError::config("empty storage key")
            .to_string()
            .contains("empty storage key"));
    }
}
