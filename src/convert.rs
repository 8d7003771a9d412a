//! JSON request/response boundary.
//!
//! Transport-agnostic: a host (HTTP handler, FFI caller, CLI) hands over the
//! request body and gets back a status code and a JSON response body.
//!
//! # Example
//!
//! ```
//! use abnt::convert::handle_json;
//!
//! let (status, body) = handle_json(r#"{"filename":"relatorio.docx"}"#);
//! assert_eq!(status, 200);
//! assert!(body.contains("relatorio_ABNT.pdf"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Figure;
use crate::naming;
use crate::options::RawOptions;
use crate::render::RenderedDocument;

/// A formatting request as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRequest {
    /// Source filename, e.g. `relatorio.docx`
    pub filename: String,

    /// Formatting choices; absent fields take defaults
    #[serde(default)]
    pub options: RawOptions,

    /// Figures in document order
    #[serde(default)]
    pub figures: Vec<Figure>,

    /// Extracted body text, used in place of the placeholder paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FormatRequest {
    /// Create a request with default options and no figures.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Set raw options.
    pub fn with_options(mut self, options: RawOptions) -> Self {
        self.options = options;
        self
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResponse {
    /// Always `true`
    pub success: bool,
    /// Rendered HTML document
    pub html: String,
    /// Suggested output filename
    pub filename: String,
}

impl From<RenderedDocument> for FormatResponse {
    fn from(doc: RenderedDocument) -> Self {
        Self {
            success: doc.success,
            html: doc.html,
            filename: doc.filename,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Check the request-level fields that option normalization does not cover.
///
/// The filename must leave a non-blank name once `.doc`/`.docx` is stripped.
/// Figure ids must be non-zero and unique.
pub fn validate_request(filename: &str, figures: &[Figure]) -> Result<()> {
    if naming::strip_extension(filename).trim().is_empty() {
        return Err(Error::validation("filename", filename));
    }

    let mut seen = HashSet::with_capacity(figures.len());
    for figure in figures {
        if figure.id == 0 || !seen.insert(figure.id) {
            return Err(Error::validation("figures.id", figure.id.to_string()));
        }
    }
    Ok(())
}

/// Decode a request body.
///
/// Structural problems (bad JSON, missing `filename`, wrong shapes) are
/// [`Error::InvalidRequest`]; an option field of the wrong JSON type is an
/// [`Error::Validation`] naming that field.
pub fn parse_request(body: &str) -> Result<FormatRequest> {
    let mut value: serde_json::Value = serde_json::from_str(body)?;
    let options = value.as_object_mut().and_then(|map| map.remove("options"));

    let mut request: FormatRequest = serde_json::from_value(value)?;
    if let Some(options) = options {
        request.options = RawOptions::from_json(options)?;
    }
    Ok(request)
}

/// Format one decoded request.
pub fn format_request(request: &FormatRequest) -> Result<RenderedDocument> {
    crate::format(
        &request.filename,
        &request.options,
        &request.figures,
        request.content.as_deref(),
    )
}

/// Handle a JSON request body, returning a status code and JSON response body.
///
/// Success is `200` with `{success, html, filename}`; any failure is the
/// error's status code with `{error}`.
pub fn handle_json(body: &str) -> (u16, String) {
    let result = parse_request(body).and_then(|request| format_request(&request));

    match result {
        Ok(doc) => {
            log::debug!("Request for '{}' succeeded", doc.filename);
            (200, encode(&FormatResponse::from(doc)))
        }
        Err(err) => {
            log::warn!("Request failed: {}", err);
            (err.status_code(), encode(&ErrorResponse::from(&err)))
        }
    }
}

fn encode<T: Serialize>(value: &T) -> String {
    // Plain structs of strings and bools always serialize.
    serde_json::to_string(value).unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_request() {
        let request = parse_request(r#"{"filename":"a.docx"}"#).unwrap();
        assert_eq!(request, FormatRequest::new("a.docx"));
    }

    #[test]
    fn test_parse_full_request() {
        let request = parse_request(
            r#"{
                "filename": "relatorio.docx",
                "options": {"margins": "abnt", "lineSpacing": "1.5", "autoCaptions": true},
                "figures": [{"id": 1, "name": "Diagrama", "originalName": "img001.png"}],
                "content": "Texto extraído."
            }"#,
        )
        .unwrap();

        assert_eq!(request.options.margins.as_deref(), Some("abnt"));
        assert_eq!(request.figures[0].display_name, "Diagrama");
        assert_eq!(request.content.as_deref(), Some("Texto extraído."));
    }

    #[test]
    fn test_malformed_request() {
        let err = parse_request("{not json").unwrap_err();
        assert_eq!(err.status_code(), 400);

        let err = parse_request(r#"{"figures": []}"#).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_validate_filename() {
        assert!(validate_request("tese.docx", &[]).is_ok());
        for name in ["", "   ", ".docx", ".DOC"] {
            let err = validate_request(name, &[]).unwrap_err();
            assert!(matches!(err, Error::Validation { field: "filename", .. }));
        }
    }

    #[test]
    fn test_validate_figure_ids() {
        let zero = vec![Figure::new(0, "A", "a.png")];
        let err = validate_request("a.docx", &zero).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "figures.id", .. }));

        let duplicated = vec![Figure::new(2, "A", "a.png"), Figure::new(2, "B", "b.png")];
        let err = validate_request("a.docx", &duplicated).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for figures.id: \"2\"");
    }

    #[test]
    fn test_handle_json_success() {
        let (status, body) = handle_json(r#"{"filename":"Tese.DOCX"}"#);
        assert_eq!(status, 200);

        let response: FormatResponse = serde_json::from_str(&body).unwrap();
        assert!(response.success);
        assert_eq!(response.filename, "Tese_ABNT.pdf");
        assert!(response.html.contains("TESE"));
    }

    #[test]
    fn test_handle_json_wrongly_typed_option() {
        let (status, body) = handle_json(r#"{"filename":"a.docx","options":{"lineSpacing":1.5}}"#);
        assert_eq!(status, 422);

        let response: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(response.error, "Invalid value for lineSpacing: \"1.5\"");

        let (status, body) = handle_json(r#"{"filename":"a.docx","options":{"fontSize":12}}"#);
        assert_eq!(status, 422);
        assert!(body.contains("fontSize"));
    }

    #[test]
    fn test_null_options_take_defaults() {
        let request = parse_request(r#"{"filename":"a.docx","options":null}"#).unwrap();
        assert_eq!(request.options, RawOptions::default());
    }

    #[test]
    fn test_handle_json_validation_error() {
        let (status, body) =
            handle_json(r#"{"filename":"a.docx","options":{"fontFamily":"Comic Sans"}}"#);
        assert_eq!(status, 422);

        let response: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert!(response.error.contains("fontFamily"));
    }
}
