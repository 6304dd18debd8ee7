//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `FORMGEN_DEBUG` | `debug` |
//! | `FORMGEN_LOG_LEVEL` | `log_level` |
//! | `FORMGEN_LAYOUT_STYLE` | `layout.style` |
//! | `FORMGEN_LAYOUT_SIZE` | `layout.size` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use formgen_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("formgen.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::FormgenError;
use crate::settings::{LayoutStyle, Settings};

/// Loads settings from a TOML string.
///
/// Keys missing from the TOML keep their default values, including keys
/// nested inside tables.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, FormgenError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| FormgenError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, FormgenError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        FormgenError::ConfigurationError(format!(
            "Failed to read TOML file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormgenError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> Result<Settings, FormgenError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| FormgenError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, FormgenError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        FormgenError::ConfigurationError(format!(
            "Failed to read JSON file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_json_str(&content)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// - `FORMGEN_DEBUG` -> `debug` (values: "true"/"1"/"yes" => true, anything else => false)
/// - `FORMGEN_LOG_LEVEL` -> `log_level`
/// - `FORMGEN_LAYOUT_STYLE` -> `layout.style` (unknown styles are ignored)
/// - `FORMGEN_LAYOUT_SIZE` -> `layout.size`
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("FORMGEN_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("FORMGEN_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("FORMGEN_LAYOUT_STYLE") {
        match val.parse::<LayoutStyle>() {
            Ok(style) => settings.layout.style = style,
            Err(e) => tracing::warn!(value = %val, error = %e, "ignoring FORMGEN_LAYOUT_STYLE"),
        }
    }

    if let Ok(val) = std::env::var("FORMGEN_LAYOUT_SIZE") {
        settings.layout.size = val;
    }
}

// ============================================================
// Helpers
// ============================================================

fn merge_over_defaults(
    value: serde_json::Value,
    source: &str,
) -> Result<Settings, FormgenError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        FormgenError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        FormgenError::ConfigurationError(format!(
            "Failed to deserialize settings from {source}: {e}"
        ))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            debug = true
            log_level = "debug"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "debug");
        // Defaults preserved
        assert_eq!(settings.layout.style, LayoutStyle::Vertical);
    }

    #[test]
    fn test_from_toml_str_partial_layout_table() {
        let toml = r#"
            [layout]
            style = "horizontal"
            widths = [3, 9]
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.layout.style, LayoutStyle::Horizontal);
        assert_eq!(settings.layout.widths, [3, 9]);
        assert_eq!(settings.layout.size, "md");
        assert_eq!(settings.layout.method, "POST");
    }

    #[test]
    fn test_from_toml_str_nested_layout_fills_defaults() {
        let toml = r#"
            [nested_layout]
            style = "plain"
        "#;

        let settings = from_toml_str(toml).unwrap();
        let nested = settings.nested_layout.unwrap();
        assert_eq!(nested.style, LayoutStyle::Plain);
        assert_eq!(nested.widths, [2, 10]);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let err = from_toml_str("this is = = not toml").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_from_toml_str_unknown_style() {
        let err = from_toml_str("[layout]\nstyle = \"diagonal\"").unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize settings from TOML"));
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[layout]\nsize = \"lg\"").unwrap();

        let settings = from_toml_file(file.path()).unwrap();
        assert_eq!(settings.layout.size, "lg");
    }

    #[test]
    fn test_from_toml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = from_toml_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read TOML file"));
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str() {
        let json = r#"{"layout": {"style": "plain", "want_labels": false}}"#;
        let settings = from_json_str(json).unwrap();
        assert_eq!(settings.layout.style, LayoutStyle::Plain);
        assert!(!settings.layout.want_labels);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level": "warn"}}"#).unwrap();

        let settings = from_json_file(file.path()).unwrap();
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{nope").is_err());
    }

    // ── Environment ─────────────────────────────────────────────────

    // All FORMGEN_* variables are exercised in one test so parallel tests
    // never observe each other's values.
    #[test]
    fn test_apply_env_overrides() {
        std::env::set_var("FORMGEN_DEBUG", "yes");
        std::env::set_var("FORMGEN_LOG_LEVEL", "trace");
        std::env::set_var("FORMGEN_LAYOUT_STYLE", "horizontal");
        std::env::set_var("FORMGEN_LAYOUT_SIZE", "sm");

        let settings = from_env();
        assert!(settings.debug);
        assert_eq!(settings.log_level, "trace");
        assert_eq!(settings.layout.style, LayoutStyle::Horizontal);
        assert_eq!(settings.layout.size, "sm");

        std::env::set_var("FORMGEN_DEBUG", "off");
        std::env::set_var("FORMGEN_LAYOUT_STYLE", "bogus");
        let settings = from_env();
        assert!(!settings.debug);
        assert_eq!(settings.layout.style, LayoutStyle::Vertical);

        std::env::remove_var("FORMGEN_DEBUG");
        std::env::remove_var("FORMGEN_LOG_LEVEL");
        std::env::remove_var("FORMGEN_LAYOUT_STYLE");
        std::env::remove_var("FORMGEN_LAYOUT_SIZE");
    }

    // ── Helpers ─────────────────────────────────────────────────────

    #[test]
    fn test_merge_json_nested() {
        let base = serde_json::json!({"a": {"b": 1, "c": 2}});
        let over = serde_json::json!({"a": {"c": 3}});
        assert_eq!(merge_json(base, over), serde_json::json!({"a": {"b": 1, "c": 3}}));
    }
}
