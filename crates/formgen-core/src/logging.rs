//! Logging integration for formgen.
//!
//! Renderers emit [`tracing`] events; this module installs a subscriber
//! configured from [`Settings`](crate::settings::Settings) and provides a
//! span helper for grouping the events of one render call.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug",
/// "formgen_forms=trace"). In debug mode a pretty, human-readable format is
/// used; otherwise a structured JSON format is used. Installing a second
/// subscriber is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for rendering one form.
///
/// # Examples
///
/// ```
/// use formgen_core::logging::render_span;
///
/// let span = render_span("signup");
/// let _guard = span.enter();
/// tracing::debug!("rendering");
/// ```
pub fn render_span(form_name: &str) -> tracing::Span {
    tracing::debug_span!("render_form", form = form_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let settings = Settings {
            debug: false,
            log_level: "warn".to_string(),
            ..Settings::default()
        };
        setup_logging(&settings);
        setup_logging(&settings);
    }

    #[test]
    fn test_setup_logging_bad_filter_falls_back() {
        let settings = Settings {
            log_level: "[not a filter".to_string(),
            ..Settings::default()
        };
        setup_logging(&settings);
    }

    #[test]
    fn test_render_span_enters() {
        let span = render_span("article");
        let _guard = span.enter();
        tracing::debug!("inside span");
    }
}
