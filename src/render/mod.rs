//! Rendering of composed documents to HTML, plain text and JSON.

mod html;
mod json;
mod layout;
mod result;
mod text;

pub use html::{escape_html, render, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use layout::{line_height, Margins, PageLayout, PAGE_NUMBER_MARKER, PARAGRAPH_INDENT_CM};
pub use result::{RenderStats, RenderedDocument};
pub use text::to_text;
