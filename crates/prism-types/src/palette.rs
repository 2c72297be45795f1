// ABOUTME: Palette document types: a complete role->color assignment plus metadata
// ABOUTME: Includes the built-in default palette every session starts from

use crate::role::ColorRole;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Identifier of the built-in default palette
pub const DEFAULT_PALETTE_ID: &str = "default";

/// Display name of the built-in default palette
pub const DEFAULT_PALETTE_NAME: &str = "Default Theme";

/// Color assignment holding a value for every [`ColorRole`].
///
/// Values are color strings in either encoding. Construction always starts
/// from a complete set, so lookups never miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorSet(BTreeMap<ColorRole, String>);

impl ColorSet {
    /// Build a set from a lookup that is asked once per role
    pub fn from_fn<F>(mut value_for: F) -> Self
    where
        F: FnMut(ColorRole) -> String,
    {
        Self(
            ColorRole::ALL
                .into_iter()
                .map(|role| (role, value_for(role)))
                .collect(),
        )
    }

    /// Value assigned to `role`
    pub fn get(&self, role: ColorRole) -> &str {
        self.0.get(&role).map(String::as_str).unwrap_or_default()
    }

    /// Replace the value assigned to `role`, returning the previous one
    pub fn set(&mut self, role: ColorRole, value: impl Into<String>) -> String {
        self.0.insert(role, value.into()).unwrap_or_default()
    }

    /// Iterate over `(role, value)` pairs in role order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        self.0.iter().map(|(role, value)| (*role, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A complete, named assignment of colors to every role
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Unique identifier
    pub id: String,
    /// Display name; not required to be unique
    pub name: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Role assignments
    pub colors: ColorSet,
}

impl Palette {
    /// The built-in default palette.
    ///
    /// HSL-triplet roles are written in triplet form so applying the default
    /// does not depend on conversion rounding.
    pub fn builtin_default() -> Self {
        Self {
            id: DEFAULT_PALETTE_ID.to_string(),
            name: DEFAULT_PALETTE_NAME.to_string(),
            description: Some("Original gallery theme".to_string()),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            colors: ColorSet::from_fn(|role| default_color(role).to_string()),
        }
    }

    /// Value assigned to `role`
    pub fn color(&self, role: ColorRole) -> &str {
        self.colors.get(role)
    }
}

/// Default value for a role
pub const fn default_color(role: ColorRole) -> &'static str {
    match role {
        ColorRole::Primary => "217 91% 60%",
        ColorRole::PrimaryHover => "#2563eb",
        ColorRole::PrimaryActive => "#1d4ed8",
        ColorRole::Secondary => "215 16% 47%",
        ColorRole::SecondaryHover => "#475569",
        ColorRole::Background => "0 0% 100%",
        ColorRole::CardBackground => "#f8fafc",
        ColorRole::HeaderBackground => "#ffffff",
        ColorRole::TextPrimary => "#0f172a",
        ColorRole::TextSecondary => "#475569",
        ColorRole::TextMuted => "#94a3b8",
        ColorRole::TextInverse => "#ffffff",
        ColorRole::Border => "214 32% 91%",
        ColorRole::BorderHover => "#cbd5e1",
        ColorRole::Link => "#3b82f6",
        ColorRole::LinkHover => "#2563eb",
        ColorRole::Success => "#10b981",
        ColorRole::Warning => "#f59e0b",
        ColorRole::Error => "#ef4444",
        ColorRole::Info => "#06b6d4",
        ColorRole::ImageBackground => "#f1f5f9",
        ColorRole::BadgeBackground => "#e2e8f0",
        ColorRole::HighlightColor => "#fbbf24",
    }
}
