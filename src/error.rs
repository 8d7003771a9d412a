//! Error types for the abnt library.

use std::io;
use thiserror::Error;

/// Result type alias for abnt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while formatting a document.
///
/// Validation, render and export failures are separate variants so callers
/// can tell whether to fix the request, report a bug, or retry the export.
#[derive(Error, Debug)]
pub enum Error {
    /// A supplied option or request field has an unrecognized value.
    #[error("Invalid value for {field}: {value:?}")]
    Validation {
        /// Wire name of the offending field (e.g. `fontFamily`)
        field: &'static str,
        /// The rejected value as supplied
        value: String,
    },

    /// The request body could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The document model is structurally inconsistent.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The external export step failed.
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error when reading inputs or writing outputs.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a validation error for a field.
    pub fn validation(field: &'static str, value: impl Into<String>) -> Self {
        Error::Validation {
            field,
            value: value.into(),
        }
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Check if this is a render error.
    pub fn is_render(&self) -> bool {
        matches!(self, Error::Render(_))
    }

    /// Check if this is an export error.
    pub fn is_export(&self) -> bool {
        matches!(self, Error::Export(_))
    }

    /// Status code used when the error crosses a request/response boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidRequest(_) => 400,
            Error::Validation { .. } => 422,
            Error::Export(_) => 502,
            Error::Render(_) | Error::Io(_) => 500,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("fontFamily", "Comic Sans");
        assert_eq!(
            err.to_string(),
            "Invalid value for fontFamily: \"Comic Sans\""
        );

        let err = Error::Render("figure block 3 references unknown figure 9".into());
        assert_eq!(
            err.to_string(),
            "Rendering error: figure block 3 references unknown figure 9"
        );
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let validation = Error::validation("margins", "wide");
        let render = Error::Render("bad".into());
        let export = Error::Export("disk full".into());

        assert!(validation.is_validation() && !validation.is_render());
        assert!(render.is_render() && !render.is_export());
        assert!(export.is_export() && !export.is_validation());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::InvalidRequest("x".into()).status_code(), 400);
        assert_eq!(Error::validation("fontSize", "14pt").status_code(), 422);
        assert_eq!(Error::Render("x".into()).status_code(), 500);
        assert_eq!(Error::Export("x".into()).status_code(), 502);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }
}
