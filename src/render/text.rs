//! Plain-text preview of a document model.

use crate::error::Result;
use crate::model::{Block, DocumentModel, DocumentSection};

use super::layout::{PageLayout, PAGE_NUMBER_MARKER};

/// Render a plain-text outline of the document.
///
/// The outline mirrors the HTML output: header and page-number markers, title
/// page, numbered headings, paragraphs, figure placeholders and captions.
pub fn to_text(doc: &DocumentModel) -> Result<String> {
    doc.check_structure()?;

    let layout = PageLayout::from_options(&doc.options);
    let mut output = String::new();

    if layout.header || layout.page_number {
        let header = if layout.header { doc.title.as_str() } else { "" };
        let number = if layout.page_number {
            PAGE_NUMBER_MARKER
        } else {
            ""
        };
        output.push_str(&format!("{}\t{}\n\n", header, number));
    }

    for section in &doc.sections {
        match section {
            DocumentSection::TitlePage { title, subtitle } => {
                output.push_str(&format!("{}\n{}\n\n", title, subtitle.text));
            }
            DocumentSection::Section(s) => {
                let mut blocks = s.body.iter().peekable();
                while let Some(Block::PageBreak) = blocks.peek() {
                    output.push_str("---\n\n");
                    blocks.next();
                }
                output.push_str(&s.numbered_heading());
                output.push_str("\n\n");
                for block in blocks {
                    match block {
                        Block::Paragraph(p) if !p.is_empty() => {
                            output.push_str(&p.text);
                            output.push_str("\n\n");
                        }
                        Block::Figure(fb) => {
                            output.push_str(&format!("[ Imagem {} ]\n", fb.number));
                            if let Some(ref caption) = fb.caption {
                                output.push_str(&caption.line());
                                output.push('\n');
                                output.push_str(&caption.source);
                                output.push('\n');
                            }
                            output.push('\n');
                        }
                        Block::PageBreak => output.push_str("---\n\n"),
                        Block::Paragraph(_) => {}
                    }
                }
            }
        }
    }

    Ok(output.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::model::Figure;
    use crate::options::FormattingOptions;

    #[test]
    fn test_to_text_outline() {
        let figures = vec![Figure::new(3, "Mapa", "m.png")];
        let doc = compose("Tese.docx", &FormattingOptions::default(), &figures, None);
        let text = to_text(&doc).unwrap();

        assert!(text.starts_with("Tese\t1"));
        assert!(text.contains("TESE\nDocumento formatado conforme normas ABNT"));
        assert!(text.contains("---\n\n1 INTRODUÇÃO"));
        assert!(text.contains("[ Imagem 1 ]\nFigura 1 - Mapa\nFonte: Elaborado pelo autor (2024)"));
        assert!(text.ends_with("selecionadas pelo usuário."));
    }

    #[test]
    fn test_to_text_without_header() {
        let options = FormattingOptions::default()
            .with_header_footer(false)
            .with_page_numbers(false);
        let doc = compose("Tese.docx", &options, &[], None);
        let text = to_text(&doc).unwrap();
        assert!(text.starts_with("TESE"));
    }
}
