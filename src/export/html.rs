//! HTML file exporter.

use crate::error::{Error, Result};
use crate::render::RenderedDocument;
use std::fs;
use std::path::{Path, PathBuf};

use super::{artifact_name, Exporter};

/// Writes the rendered HTML as `{name}_ABNT.html`.
///
/// The file can be opened in a browser and printed to PDF; the embedded
/// `@page` rules carry the margins.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    _private: (),
}

impl HtmlExporter {
    /// Create a new HTML exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Exporter for HtmlExporter {
    fn name(&self) -> &str {
        "html"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn export(&self, doc: &RenderedDocument, dir: &Path) -> Result<PathBuf> {
        if !doc.success {
            return Err(Error::Export(format!(
                "'{}' was not rendered successfully",
                doc.filename
            )));
        }

        fs::create_dir_all(dir).map_err(|e| {
            Error::Export(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let path = dir.join(artifact_name(doc, self.extension()));
        fs::write(&path, &doc.html)
            .map_err(|e| Error::Export(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(path)
    }
}
