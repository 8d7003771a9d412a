//! Document-level types.

use super::{Figure, FigureBlock, Paragraph};
use crate::error::{Error, Result};
use crate::options::FormattingOptions;
use serde::Serialize;

/// A composed, numbered document ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentModel {
    /// Display title (source filename without extension, mixed case)
    pub title: String,

    /// Source filename as supplied by the caller
    pub source_name: String,

    /// Sections in reading order
    pub sections: Vec<DocumentSection>,

    /// Figures referenced by [`FigureBlock`]s, in caption order
    pub figures: Vec<Figure>,

    /// Resolved formatting options
    pub options: FormattingOptions,
}

impl DocumentModel {
    /// Look up a figure by id.
    pub fn figure(&self, id: u32) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id == id)
    }

    /// Numbered sections, skipping the title page.
    pub fn numbered_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter_map(|s| match s {
            DocumentSection::Section(section) => Some(section),
            DocumentSection::TitlePage { .. } => None,
        })
    }

    /// Find a numbered section by kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.numbered_sections().find(|s| s.kind == kind)
    }

    /// All figure blocks, in document order.
    pub fn figure_blocks(&self) -> impl Iterator<Item = &FigureBlock> {
        self.numbered_sections()
            .flat_map(|s| s.body.iter())
            .filter_map(|b| match b {
                Block::Figure(fb) => Some(fb),
                _ => None,
            })
    }

    /// Verify the structural invariants renderers rely on.
    ///
    /// The title page comes first and only once, and Introduction is the
    /// first numbered section. Section numbers must run 1..=n, caption
    /// numbers 1..=k, every figure block must reference a known figure, and
    /// captions must be present exactly when automatic captions are enabled,
    /// carrying the figure's current display name.
    pub fn check_structure(&self) -> Result<()> {
        if !matches!(self.sections.first(), Some(DocumentSection::TitlePage { .. })) {
            return Err(Error::Render(
                "document does not open with the title page".to_string(),
            ));
        }
        if self.sections[1..]
            .iter()
            .any(|s| matches!(s, DocumentSection::TitlePage { .. }))
        {
            return Err(Error::Render("document has more than one title page".to_string()));
        }

        match self.numbered_sections().next() {
            Some(first) if first.kind == SectionKind::Introduction => {}
            Some(first) => {
                return Err(Error::Render(format!(
                    "first section is {:?}, expected Introduction",
                    first.kind
                )));
            }
            None => return Err(Error::Render("document has no sections".to_string())),
        }

        for (index, section) in self.numbered_sections().enumerate() {
            let expected = index as u32 + 1;
            if section.number != expected {
                return Err(Error::Render(format!(
                    "section {:?} is numbered {}, expected {}",
                    section.kind, section.number, expected
                )));
            }
        }

        for (index, block) in self.figure_blocks().enumerate() {
            let expected = index as u32 + 1;
            if block.number != expected {
                return Err(Error::Render(format!(
                    "figure block is numbered {}, expected {}",
                    block.number, expected
                )));
            }
            let figure = self.figure(block.figure_id).ok_or_else(|| {
                Error::Render(format!(
                    "figure block {} references unknown figure {}",
                    block.number, block.figure_id
                ))
            })?;
            match (&block.caption, self.options.auto_captions) {
                (Some(caption), true) if caption.number != block.number => {
                    return Err(Error::Render(format!(
                        "caption number {} does not match figure block {}",
                        caption.number, block.number
                    )));
                }
                (Some(caption), true) if caption.text != figure.display_name => {
                    return Err(Error::Render(format!(
                        "caption {} reads {:?} but figure {} is named {:?}",
                        caption.number, caption.text, figure.id, figure.display_name
                    )));
                }
                (None, true) => {
                    return Err(Error::Render(format!(
                        "figure block {} is missing its caption",
                        block.number
                    )));
                }
                (Some(_), false) => {
                    return Err(Error::Render(format!(
                        "figure block {} has a caption but captions are disabled",
                        block.number
                    )));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// A top-level part of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentSection {
    /// Cover page with the uppercased title
    TitlePage {
        /// Uppercased display title
        title: String,
        /// Fixed subtitle line, centered
        subtitle: Paragraph,
    },

    /// A numbered section
    Section(Section),
}

/// A numbered section with a heading and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// 1-based, contiguous section number
    pub number: u32,

    /// Which section this is
    pub kind: SectionKind,

    /// Heading text (without the number)
    pub heading: String,

    /// Body blocks in order
    pub body: Vec<Block>,
}

impl Section {
    /// Heading as printed, e.g. `2 FIGURAS`.
    pub fn numbered_heading(&self) -> String {
        format!("{} {}", self.number, self.heading.to_uppercase())
    }
}

/// Kinds of numbered sections, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Always present, always first
    Introduction,
    /// Present only when the document has figures
    Figures,
    /// Always present, always last
    Conclusion,
}

impl SectionKind {
    /// Heading text for this section.
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Introduction => "INTRODUÇÃO",
            SectionKind::Figures => "FIGURAS",
            SectionKind::Conclusion => "CONSIDERAÇÕES FINAIS",
        }
    }
}

/// Content inside a section body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A figure placeholder with optional caption
    Figure(FigureBlock),

    /// Advisory page break before the next content
    PageBreak,
}
