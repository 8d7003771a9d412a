//! Export seam for writing rendered documents to disk.
//!
//! Rendering stops at [`RenderedDocument`]; turning it into a file is the
//! job of an [`Exporter`]. Exporters are registered by name and looked up
//! case-insensitively.
//!
//! # Example
//!
//! ```no_run
//! use abnt::export::ExporterRegistry;
//! use std::path::Path;
//!
//! fn main() -> abnt::Result<()> {
//!     let doc = abnt::Abnt::new().format("relatorio.docx")?;
//!     let registry = ExporterRegistry::with_defaults();
//!     let path = registry.export("html", &doc, Path::new("out"))?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

mod html;

pub use html::HtmlExporter;

use crate::error::{Error, Result};
use crate::render::RenderedDocument;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Trait for exporters.
///
/// Implement this trait to add an output artifact, e.g. a PDF printer.
pub trait Exporter: Send + Sync {
    /// Get the name of this exporter.
    fn name(&self) -> &str;

    /// File extension written, lowercase without the leading dot.
    fn extension(&self) -> &str;

    /// Write the document into `dir` and return the path written.
    fn export(&self, doc: &RenderedDocument, dir: &Path) -> Result<PathBuf>;
}

/// Artifact filename for a rendered document: its `{name}_ABNT.pdf` output
/// name with the extension replaced.
pub fn artifact_name(doc: &RenderedDocument, extension: &str) -> String {
    let stem = doc.filename.strip_suffix(".pdf").unwrap_or(&doc.filename);
    format!("{}.{}", stem, extension)
}

/// Registry for exporters.
pub struct ExporterRegistry {
    by_name: HashMap<String, Arc<dyn Exporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the default exporters (HTML).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HtmlExporter::new()));
        registry
    }

    /// Register an exporter, replacing any with the same name.
    pub fn register(&mut self, exporter: Arc<dyn Exporter>) {
        self.by_name
            .insert(exporter.name().to_lowercase(), exporter);
    }

    /// Get an exporter by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Exporter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an exporter is registered.
    pub fn supports(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// Names of all registered exporters, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Export with the named exporter.
    pub fn export(&self, name: &str, doc: &RenderedDocument, dir: &Path) -> Result<PathBuf> {
        let exporter = self
            .get(name)
            .ok_or_else(|| Error::Export(format!("No exporter named: {}", name)))?;

        let path = exporter.export(doc, dir)?;
        log::info!("Exported '{}' with {} to {}", doc.filename, name, path.display());
        Ok(path)
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderStats;

    fn rendered(filename: &str) -> RenderedDocument {
        RenderedDocument::new("<html></html>".into(), filename.into(), RenderStats::new())
    }

    #[test]
    fn test_artifact_name() {
        assert_eq!(artifact_name(&rendered("tese_ABNT.pdf"), "html"), "tese_ABNT.html");
        assert_eq!(artifact_name(&rendered("v1.2_ABNT.pdf"), "pdf"), "v1.2_ABNT.pdf");
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExporterRegistry::with_defaults();
        assert!(registry.supports("html"));
        assert!(registry.supports("HTML"));
        assert!(!registry.supports("pdf"));
        assert_eq!(registry.names(), vec!["html"]);
    }

    #[test]
    fn test_registry_unknown_exporter() {
        let registry = ExporterRegistry::new();
        let err = registry
            .export("pdf", &rendered("a_ABNT.pdf"), Path::new("."))
            .unwrap_err();
        assert!(err.is_export());
        assert_eq!(err.status_code(), 502);
    }
}
