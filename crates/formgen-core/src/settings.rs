//! Settings for formgen.
//!
//! [`Settings`] holds logging configuration and the default form layout.
//! Layout settings are plain data here; `formgen-forms` turns them into a
//! concrete layout configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormgenError;

/// The named layout presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    /// No styling classes at all.
    Plain,
    /// Labels stacked above their inputs.
    #[default]
    Vertical,
    /// Labels beside their inputs on a column grid.
    Horizontal,
}

impl fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "plain",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        };
        write!(f, "{name}")
    }
}

impl FromStr for LayoutStyle {
    type Err = FormgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "vertical" | "stacked" => Ok(Self::Vertical),
            "horizontal" | "inline" => Ok(Self::Horizontal),
            other => Err(FormgenError::ConfigurationError(format!(
                "Unknown layout style '{other}'"
            ))),
        }
    }
}

/// Layout configuration as it appears in a settings file.
///
/// ```toml
/// [layout]
/// style = "horizontal"
/// widths = [3, 9]
/// size = "lg"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Which preset to use.
    pub style: LayoutStyle,
    /// Grid widths of the label column and the field column (horizontal only).
    pub widths: [u8; 2],
    /// Grid breakpoint used in column classes (horizontal only).
    pub size: String,
    /// Whether labels are rendered.
    pub want_labels: bool,
    /// HTTP method of rendered forms.
    pub method: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            style: LayoutStyle::Vertical,
            widths: [2, 10],
            size: "md".to_string(),
            want_labels: true,
            method: "POST".to_string(),
        }
    }
}

/// Top-level formgen settings.
///
/// # Examples
///
/// ```
/// use formgen_core::settings::{LayoutStyle, Settings};
///
/// let settings = Settings::default();
/// assert!(!settings.debug);
/// assert_eq!(settings.layout.style, LayoutStyle::Vertical);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Logging ──────────────────────────────────────────────────────

    /// Whether debug mode (pretty log output) is enabled.
    pub debug: bool,
    /// The log filter (e.g. "info", "formgen_forms=debug").
    pub log_level: String,

    // ── Rendering ────────────────────────────────────────────────────

    /// Default layout for rendered forms.
    pub layout: LayoutSettings,
    /// Layout for sub-forms; `None` means the preset's own default.
    pub nested_layout: Option<LayoutSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
            layout: LayoutSettings::default(),
            nested_layout: None,
        }
    }
}
