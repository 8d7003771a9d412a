//! Document model types.
//!
//! This module defines the intermediate representation that sits between
//! composition and rendering. A [`DocumentModel`] is fully numbered and
//! annotated; renderers only serialize it.

mod document;
mod figure;
mod paragraph;

pub use document::{Block, DocumentModel, DocumentSection, Section, SectionKind};
pub use figure::{Caption, Figure, FigureBlock, CAPTION_SOURCE};
pub use paragraph::{Alignment, Paragraph, ParagraphStyle};
