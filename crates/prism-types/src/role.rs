// ABOUTME: Closed set of semantic color roles and their CSS variable table
// ABOUTME: Each role knows its backing CSS custom property and canonical color encoding

use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding a color value is stored and applied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorEncoding {
    /// `#rrggbb` literal, consumed directly as a CSS color
    Hex,
    /// Bare `"H S% L%"` components, consumed as `hsl(var(--name))`
    HslTriplet,
}

/// A named semantic slot in the theme.
///
/// The set is fixed at compile time. Declaration order is the order roles
/// are iterated, serialized and applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    // Primary colors
    Primary,
    PrimaryHover,
    PrimaryActive,
    Secondary,
    SecondaryHover,

    // Background colors
    Background,
    CardBackground,
    HeaderBackground,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextMuted,
    TextInverse,

    // UI elements
    Border,
    BorderHover,
    Link,
    LinkHover,
    Success,
    Warning,
    Error,
    Info,

    // Gallery specific
    ImageBackground,
    BadgeBackground,
    HighlightColor,
}

impl ColorRole {
    /// Every role, in declaration order
    pub const ALL: [ColorRole; 23] = [
        ColorRole::Primary,
        ColorRole::PrimaryHover,
        ColorRole::PrimaryActive,
        ColorRole::Secondary,
        ColorRole::SecondaryHover,
        ColorRole::Background,
        ColorRole::CardBackground,
        ColorRole::HeaderBackground,
        ColorRole::TextPrimary,
        ColorRole::TextSecondary,
        ColorRole::TextMuted,
        ColorRole::TextInverse,
        ColorRole::Border,
        ColorRole::BorderHover,
        ColorRole::Link,
        ColorRole::LinkHover,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
        ColorRole::Info,
        ColorRole::ImageBackground,
        ColorRole::BadgeBackground,
        ColorRole::HighlightColor,
    ];

    /// Document key used in serialized palettes (camelCase)
    pub const fn key(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::PrimaryHover => "primaryHover",
            ColorRole::PrimaryActive => "primaryActive",
            ColorRole::Secondary => "secondary",
            ColorRole::SecondaryHover => "secondaryHover",
            ColorRole::Background => "background",
            ColorRole::CardBackground => "cardBackground",
            ColorRole::HeaderBackground => "headerBackground",
            ColorRole::TextPrimary => "textPrimary",
            ColorRole::TextSecondary => "textSecondary",
            ColorRole::TextMuted => "textMuted",
            ColorRole::TextInverse => "textInverse",
            ColorRole::Border => "border",
            ColorRole::BorderHover => "borderHover",
            ColorRole::Link => "link",
            ColorRole::LinkHover => "linkHover",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Info => "info",
            ColorRole::ImageBackground => "imageBackground",
            ColorRole::BadgeBackground => "badgeBackground",
            ColorRole::HighlightColor => "highlightColor",
        }
    }

    /// CSS custom property written for this role
    pub const fn css_variable(self) -> &'static str {
        match self {
            ColorRole::Primary => "--primary",
            ColorRole::PrimaryHover => "--primary-hover",
            ColorRole::PrimaryActive => "--primary-active",
            ColorRole::Secondary => "--secondary",
            ColorRole::SecondaryHover => "--secondary-hover",
            ColorRole::Background => "--background",
            ColorRole::CardBackground => "--card-background",
            ColorRole::HeaderBackground => "--header-background",
            ColorRole::TextPrimary => "--text-primary",
            ColorRole::TextSecondary => "--text-secondary",
            ColorRole::TextMuted => "--text-muted",
            ColorRole::TextInverse => "--text-inverse",
            ColorRole::Border => "--border",
            ColorRole::BorderHover => "--border-hover",
            ColorRole::Link => "--link",
            ColorRole::LinkHover => "--link-hover",
            ColorRole::Success => "--success",
            ColorRole::Warning => "--warning",
            ColorRole::Error => "--error",
            ColorRole::Info => "--info",
            ColorRole::ImageBackground => "--image-background",
            ColorRole::BadgeBackground => "--badge-background",
            ColorRole::HighlightColor => "--highlight-color",
        }
    }

    /// Encoding the backing CSS variable expects
    pub const fn canonical_encoding(self) -> ColorEncoding {
        match self {
            ColorRole::Primary | ColorRole::Secondary | ColorRole::Background | ColorRole::Border => {
                ColorEncoding::HslTriplet
            }
            _ => ColorEncoding::Hex,
        }
    }

    /// Look up a role by its document key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
