//! # abnt
//!
//! Document formatting engine for the Brazilian ABNT academic style.
//!
//! The engine takes a source filename, an ordered list of figures, optional
//! extracted body text and a set of formatting choices, and produces a
//! self-contained HTML document whose embedded print rules carry the ABNT
//! page geometry and typography. Exporting that HTML to PDF is left to an
//! [`export::Exporter`].
//!
//! ## Quick Start
//!
//! ```
//! use abnt::{Abnt, Figure};
//!
//! fn main() -> abnt::Result<()> {
//!     let doc = Abnt::new()
//!         .with_figure(Figure::new(1, "Diagrama", "img001.png"))
//!         .format("relatorio.docx")?;
//!
//!     assert_eq!(doc.filename, "relatorio_ABNT.pdf");
//!     assert!(doc.html.contains("Figura 1 - Diagrama"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Validated options**: font, size, spacing and margins from a closed set
//! - **Deterministic numbering**: sections and captions renumber from scratch on every call
//! - **Print-ready markup**: `@page` margins, font stack and line height embedded in the HTML
//! - **JSON boundary**: [`convert::handle_json`] for any transport
//! - **Parallel batches**: [`format_batch`] uses Rayon

pub mod compose;
pub mod convert;
pub mod error;
pub mod export;
pub mod model;
pub mod naming;
pub mod options;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use convert::{handle_json, FormatRequest, FormatResponse};
pub use error::{Error, Result};
pub use export::{Exporter, ExporterRegistry, HtmlExporter};
pub use model::{DocumentModel, Figure, SectionKind};
pub use naming::output_filename;
pub use options::{
    normalize, FontFamily, FontSize, FormattingOptions, LineSpacing, MarginPreset, RawOptions,
};
pub use render::{JsonFormat, RenderStats, RenderedDocument};

use rayon::prelude::*;

/// Format a document.
///
/// Normalizes `options`, checks the filename and figure ids, composes the
/// document and renders it.
///
/// # Example
///
/// ```
/// use abnt::{format, Figure, RawOptions};
///
/// let figures = vec![Figure::new(1, "Diagrama", "img001.png")];
/// let doc = format("relatorio.docx", &RawOptions::default(), &figures, None).unwrap();
/// assert!(doc.html.contains("3cm 2cm 2cm 3cm"));
/// ```
pub fn format(
    filename: &str,
    options: &RawOptions,
    figures: &[Figure],
    content: Option<&str>,
) -> Result<RenderedDocument> {
    let doc = compose_document(filename, options, figures, content)?;
    render::render(&doc)
}

/// Format many requests in parallel.
///
/// Results are returned in request order; one failing request does not
/// affect the others.
pub fn format_batch(requests: &[FormatRequest]) -> Vec<Result<RenderedDocument>> {
    log::debug!("Formatting batch of {} requests", requests.len());
    requests.par_iter().map(convert::format_request).collect()
}

fn compose_document(
    filename: &str,
    options: &RawOptions,
    figures: &[Figure],
    content: Option<&str>,
) -> Result<DocumentModel> {
    let options = normalize(options)?;
    convert::validate_request(filename, figures)?;
    Ok(compose::compose(filename, &options, figures, content))
}

/// Builder for formatting documents.
///
/// # Example
///
/// ```
/// use abnt::{Abnt, Figure, FormattingOptions, MarginPreset};
///
/// let doc = Abnt::new()
///     .with_options(FormattingOptions::default().with_margins(MarginPreset::Normal))
///     .with_figure(Figure::new(1, "Mapa", "mapa.png"))
///     .with_content("Primeiro parágrafo.\n\nSegundo parágrafo.")
///     .format("tese.docx")?;
///
/// assert!(doc.html.contains("margin: 2.5cm;"));
/// # Ok::<(), abnt::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Abnt {
    options: RawOptions,
    figures: Vec<Figure>,
    content: Option<String>,
}

impl Abnt {
    /// Create a new builder with ABNT defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use already-validated options.
    pub fn with_options(mut self, options: FormattingOptions) -> Self {
        self.options = options.to_raw();
        self
    }

    /// Use raw options; they are validated when formatting.
    pub fn with_raw_options(mut self, options: RawOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the figure list.
    pub fn with_figures(mut self, figures: Vec<Figure>) -> Self {
        self.figures = figures;
        self
    }

    /// Append a figure.
    pub fn with_figure(mut self, figure: Figure) -> Self {
        self.figures.push(figure);
        self
    }

    /// Set extracted body text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Compose the document model without rendering it.
    pub fn compose(&self, filename: &str) -> Result<DocumentModel> {
        compose_document(
            filename,
            &self.options,
            &self.figures,
            self.content.as_deref(),
        )
    }

    /// Compose and render to HTML.
    pub fn format(&self, filename: &str) -> Result<RenderedDocument> {
        render::render(&self.compose(filename)?)
    }

    /// Compose and render a plain-text preview.
    pub fn preview(&self, filename: &str) -> Result<String> {
        render::to_text(&self.compose(filename)?)
    }

    /// Compose and dump the document model as JSON.
    pub fn to_json(&self, filename: &str, format: JsonFormat) -> Result<String> {
        render::to_json(&self.compose(filename)?, format)
    }

    /// The request this builder would send over the wire.
    pub fn to_request(&self, filename: &str) -> FormatRequest {
        FormatRequest {
            filename: filename.to_string(),
            options: self.options.clone(),
            figures: self.figures.clone(),
            content: self.content.clone(),
        }
    }
}
