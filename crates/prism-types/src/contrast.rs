// ABOUTME: Accessibility classification of a foreground/background contrast ratio
// ABOUTME: Derived diagnostics only; never stored with a palette

use serde::Serialize;

/// WCAG contrast thresholds for normal-size text
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AAA_NORMAL: f64 = 7.0;
    pub const AA_NORMAL: f64 = 4.5;
}

/// WCAG compliance level reached by a color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "FAIL")]
    Fail,
}

impl ContrastLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa => "AA",
            ContrastLevel::Fail => "FAIL",
        }
    }
}

/// Contrast diagnostic for one foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastCheck {
    /// Ratio rounded to two decimals
    pub ratio: f64,
    pub level: ContrastLevel,
    pub readable: bool,
}

impl ContrastCheck {
    /// Classify a raw contrast ratio.
    ///
    /// Classification uses the unrounded ratio; only the reported value is
    /// rounded.
    pub fn from_ratio(ratio: f64) -> Self {
        let level = if ratio >= ContrastRatios::AAA_NORMAL {
            ContrastLevel::Aaa
        } else if ratio >= ContrastRatios::AA_NORMAL {
            ContrastLevel::Aa
        } else {
            ContrastLevel::Fail
        };

        Self {
            ratio: (ratio * 100.0).round() / 100.0,
            level,
            readable: ratio >= ContrastRatios::AA_NORMAL,
        }
    }
}
