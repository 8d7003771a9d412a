//! Rendering result with output filename and statistics.

use serde::{Deserialize, Serialize};

/// The engine's output for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Whether rendering succeeded
    pub success: bool,

    /// Complete HTML document with embedded print rules
    pub html: String,

    /// Suggested filename for the exported artifact (`{name}_ABNT.pdf`)
    pub filename: String,

    /// Counts collected while rendering
    #[serde(skip)]
    pub stats: RenderStats,
}

impl RenderedDocument {
    /// Create a successful result.
    pub fn new(html: String, filename: String, stats: RenderStats) -> Self {
        Self {
            success: true,
            html,
            filename,
            stats,
        }
    }
}

/// Statistics collected during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of numbered sections
    pub section_count: u32,

    /// Number of paragraphs written
    pub paragraph_count: u32,

    /// Number of figure placeholders
    pub figure_count: u32,

    /// Number of captions written
    pub caption_count: u32,

    /// Number of advisory page breaks
    pub page_break_count: u32,

    /// Approximate word count of paragraph text
    pub word_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Count a paragraph and its words.
    pub fn add_paragraph(&mut self, words: usize) {
        self.paragraph_count += 1;
        self.word_count += words as u32;
    }

    /// Count a figure, and its caption if it has one.
    pub fn add_figure(&mut self, captioned: bool) {
        self.figure_count += 1;
        if captioned {
            self.caption_count += 1;
        }
    }

    /// Increment page break count.
    pub fn add_page_break(&mut self) {
        self.page_break_count += 1;
    }
}
