//! Core error type for formgen.
//!
//! Rendering itself never fails; [`FormgenError`] covers the places where a
//! caller asks for something that can go wrong: loading configuration,
//! building a layout from invalid settings, and strict checks of a declared
//! field order.

use thiserror::Error;

/// The primary error type for formgen.
#[derive(Error, Debug)]
pub enum FormgenError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration source could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Configuration parsed fine but describes an impossible layout.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Forms ────────────────────────────────────────────────────────

    /// A declared field order names a field the form does not have.
    #[error("Unknown field in field order: {0}")]
    UnknownField(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormgenError {
    /// Returns `true` for errors caused by configuration rather than by form data.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(_) | Self::ImproperlyConfigured(_)
        )
    }
}

/// A convenience type alias for `Result<T, FormgenError>`.
pub type FormgenResult<T> = Result<T, FormgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormgenError::UnknownField("email".into());
        assert_eq!(err.to_string(), "Unknown field in field order: email");
    }

    #[test]
    fn test_is_configuration() {
        assert!(FormgenError::ConfigurationError("x".into()).is_configuration());
        assert!(FormgenError::ImproperlyConfigured("x".into()).is_configuration());
        assert!(!FormgenError::UnknownField("x".into()).is_configuration());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FormgenError = io_err.into();
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("file missing"));
    }
}
