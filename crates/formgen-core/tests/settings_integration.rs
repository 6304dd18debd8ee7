//! Integration tests for loading settings and installing logging.

use formgen_core::logging::{render_span, setup_logging};
use formgen_core::settings_loader::{from_json_str, from_toml_str};
use formgen_core::{LayoutStyle, Settings};

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_full_toml_document() {
    let toml = r#"
        debug = true
        log_level = "debug"

        [layout]
        style = "horizontal"
        widths = [3, 9]
        size = "lg"
        want_labels = false
        method = "GET"

        [nested_layout]
        style = "plain"
    "#;
    let settings = from_toml_str(toml).unwrap();
    assert!(settings.debug);
    assert_eq!(settings.log_level, "debug");
    assert_eq!(settings.layout.style, LayoutStyle::Horizontal);
    assert_eq!(settings.layout.widths, [3, 9]);
    assert_eq!(settings.layout.size, "lg");
    assert!(!settings.layout.want_labels);
    assert_eq!(settings.layout.method, "GET");

    let nested = settings.nested_layout.unwrap();
    assert_eq!(nested.style, LayoutStyle::Plain);
    assert_eq!(nested.widths, [2, 10]);
}

#[test]
fn test_toml_and_json_agree() {
    let from_toml = from_toml_str("[layout]\nstyle = \"plain\"\n").unwrap();
    let from_json = from_json_str(r#"{"layout": {"style": "plain"}}"#).unwrap();
    assert_eq!(from_toml.layout.style, from_json.layout.style);
    assert_eq!(from_toml.log_level, from_json.log_level);
}

#[test]
fn test_errors_are_configuration_errors() {
    assert!(from_toml_str("[layout\n").unwrap_err().is_configuration());
    assert!(from_json_str(r#"{"layout": {"style": "diagonal"}}"#).unwrap_err().is_configuration());
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_setup_logging_is_idempotent() {
    let settings = Settings::default();
    setup_logging(&settings);
    setup_logging(&settings);
    let span = render_span("contact");
    let _guard = span.enter();
    tracing::debug!("inside render span");
}
