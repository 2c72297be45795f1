// ABOUTME: Accessibility diagnostics: WCAG checks for the fixed text-on-surface role pairs
// ABOUTME: Derived on demand from a palette and never persisted

use prism_color::contrast;
use prism_types::{ColorRole, ContrastCheck, ContrastLevel, Palette};
use std::collections::BTreeMap;

/// A foreground role read against a background role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastPair {
    pub name: &'static str,
    pub foreground: ColorRole,
    pub background: ColorRole,
}

/// Role pairs the editor reports on
pub const CONTRAST_PAIRS: [ContrastPair; 4] = [
    ContrastPair {
        name: "primaryText",
        foreground: ColorRole::TextInverse,
        background: ColorRole::Primary,
    },
    ContrastPair {
        name: "backgroundText",
        foreground: ColorRole::TextPrimary,
        background: ColorRole::Background,
    },
    ContrastPair {
        name: "cardText",
        foreground: ColorRole::TextPrimary,
        background: ColorRole::CardBackground,
    },
    ContrastPair {
        name: "headerText",
        foreground: ColorRole::TextPrimary,
        background: ColorRole::HeaderBackground,
    },
];

/// Contrast checks keyed by pair name
pub type ContrastReport = BTreeMap<&'static str, ContrastCheck>;

/// Classify two colors given in either encoding
pub fn check_colors(foreground: &str, background: &str) -> ContrastCheck {
    ContrastCheck::from_ratio(contrast(foreground, background))
}

pub fn compute_contrast_checks(palette: &Palette) -> ContrastReport {
    CONTRAST_PAIRS
        .iter()
        .map(|pair| {
            let check = check_colors(palette.color(pair.foreground), palette.color(pair.background));
            (pair.name, check)
        })
        .collect()
}

/// Names of pairs below the AA threshold
pub fn failing_pairs(report: &ContrastReport) -> Vec<&'static str> {
    report
        .iter()
        .filter(|(_, check)| !check.readable)
        .map(|(name, _)| *name)
        .collect()
}

/// Lowest level reached by any pair; `Aaa` for an empty report
pub fn weakest_level(report: &ContrastReport) -> ContrastLevel {
    report
        .values()
        .map(|check| check.level)
        .max_by_key(|level| match level {
            ContrastLevel::Aaa => 0,
            ContrastLevel::Aa => 1,
            ContrastLevel::Fail => 2,
        })
        .unwrap_or(ContrastLevel::Aaa)
}
