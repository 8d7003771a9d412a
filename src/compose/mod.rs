//! Document composition.
//!
//! [`compose`] turns a source filename, resolved options, an ordered figure
//! list and optional extracted text into a numbered [`DocumentModel`]. It is
//! a pure function: identical inputs always produce identical models.
//!
//! # Example
//!
//! ```
//! use abnt::compose::compose;
//! use abnt::model::{Figure, SectionKind};
//! use abnt::FormattingOptions;
//!
//! let figures = vec![Figure::new(1, "Diagrama", "img001.png")];
//! let doc = compose("relatorio.docx", &FormattingOptions::default(), &figures, None);
//!
//! assert_eq!(doc.title, "relatorio");
//! assert_eq!(doc.section(SectionKind::Conclusion).unwrap().number, 3);
//! ```

pub mod body;
pub mod caption;
pub mod section;

use crate::model::{
    Block, DocumentModel, DocumentSection, Figure, FigureBlock, Paragraph, Section, SectionKind,
};
use crate::naming;
use crate::options::FormattingOptions;

/// Subtitle printed under the title on the cover page.
pub const SUBTITLE: &str = "Documento formatado conforme normas ABNT";

/// Placeholder body used when no extracted text is supplied.
pub const PLACEHOLDER_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

/// Closing paragraph of the conclusion.
pub const CONCLUSION_TEXT: &str = "O documento foi processado e convertido para o formato PDF \
mantendo todas as configurações de formatação ABNT selecionadas pelo usuário.";

/// Compose a document model.
///
/// `title` is the source filename; its `.doc`/`.docx` extension is stripped
/// for the display title.
pub fn compose(
    title: &str,
    options: &FormattingOptions,
    figures: &[Figure],
    body_text: Option<&str>,
) -> DocumentModel {
    let kinds = section::plan(!figures.is_empty());
    log::debug!(
        "Composing '{}' with {} figures and sections {:?}",
        title,
        figures.len(),
        kinds
    );

    let mut sections = vec![DocumentSection::TitlePage {
        title: naming::cover_title(title),
        subtitle: Paragraph::centered(SUBTITLE),
    }];

    for numbered in section::number(&kinds) {
        let mut body = match numbered.kind {
            SectionKind::Introduction => introduction(options, body_text),
            SectionKind::Figures => figure_section(options, figures),
            SectionKind::Conclusion => vec![Block::Paragraph(Paragraph::body(CONCLUSION_TEXT))],
        };
        if numbered.number == 1 {
            body.insert(0, Block::PageBreak);
        }
        sections.push(DocumentSection::Section(Section {
            number: numbered.number,
            kind: numbered.kind,
            heading: numbered.kind.heading().to_string(),
            body,
        }));
    }

    DocumentModel {
        title: naming::display_title(title),
        source_name: title.to_string(),
        sections,
        figures: figures.to_vec(),
        options: *options,
    }
}

/// Opening sentence stating the chosen font, size and spacing.
pub fn introduction_text(options: &FormattingOptions) -> String {
    format!(
        "Este documento foi automaticamente formatado seguindo as normas da Associação \
Brasileira de Normas Técnicas (ABNT). A formatação inclui fonte {} tamanho {}, espaçamento \
entre linhas de {}, e margens conforme especificado.",
        options.font_family, options.font_size, options.line_spacing
    )
}

fn introduction(options: &FormattingOptions, body_text: Option<&str>) -> Vec<Block> {
    let mut blocks = vec![Block::Paragraph(Paragraph::body(introduction_text(options)))];

    let extracted = body_text
        .map(body::paragraphs_from_text)
        .unwrap_or_default();

    if extracted.is_empty() {
        blocks.push(Block::Paragraph(Paragraph::body(PLACEHOLDER_TEXT)));
    } else {
        log::debug!("Using {} extracted paragraphs", extracted.len());
        blocks.extend(extracted.into_iter().map(Block::Paragraph));
    }
    blocks
}

fn figure_section(options: &FormattingOptions, figures: &[Figure]) -> Vec<Block> {
    let tail = if options.auto_captions {
        "com legendas geradas automaticamente conforme normas ABNT."
    } else {
        "sem legendas automáticas."
    };
    let mut blocks = vec![Block::Paragraph(Paragraph::body(format!(
        "A seguir são apresentadas as figuras detectadas no documento original, {}",
        tail
    )))];

    blocks.extend(caption::assign(figures).into_iter().map(|numbered| {
        Block::Figure(FigureBlock {
            figure_id: numbered.figure.id,
            number: numbered.number,
            caption: numbered.caption(options.auto_captions),
        })
    }));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{FontFamily, FontSize, LineSpacing};

    fn sample_figures() -> Vec<Figure> {
        vec![
            Figure::new(1, "Screenshot do sistema", "img001.png"),
            Figure::new(2, "Diagrama de fluxo", "img002.png"),
            Figure::new(3, "Gráfico de resultados", "img003.png"),
        ]
    }

    #[test]
    fn test_title_page() {
        let doc = compose("Relatorio Final.docx", &FormattingOptions::default(), &[], None);
        assert_eq!(doc.title, "Relatorio Final");
        assert_eq!(
            doc.sections[0],
            DocumentSection::TitlePage {
                title: "RELATORIO FINAL".into(),
                subtitle: Paragraph::centered(SUBTITLE),
            }
        );
    }

    #[test]
    fn test_introduction_states_chosen_values() {
        let options = FormattingOptions::new()
            .with_font_family(FontFamily::Arial)
            .with_font_size(FontSize::Pt10)
            .with_line_spacing(LineSpacing::Double);
        let text = introduction_text(&options);
        assert!(text.contains("fonte Arial tamanho 10pt"));
        assert!(text.contains("espaçamento entre linhas de 2.0"));
    }

    #[test]
    fn test_no_figures_omits_section() {
        let doc = compose("a.docx", &FormattingOptions::default(), &[], None);
        assert!(doc.section(SectionKind::Figures).is_none());
        assert_eq!(doc.section(SectionKind::Conclusion).unwrap().number, 2);
        assert!(doc.check_structure().is_ok());
    }

    #[test]
    fn test_figure_blocks_in_order() {
        let figures = sample_figures();
        let doc = compose("a.docx", &FormattingOptions::default(), &figures, None);
        let blocks: Vec<_> = doc.figure_blocks().collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].number, 2);
        assert_eq!(
            blocks[1].caption.as_ref().unwrap().line(),
            "Figura 2 - Diagrama de fluxo"
        );
        assert_eq!(doc.section(SectionKind::Figures).unwrap().number, 2);
        assert_eq!(doc.section(SectionKind::Conclusion).unwrap().number, 3);
        assert!(doc.check_structure().is_ok());
    }

    #[test]
    fn test_captions_disabled() {
        let options = FormattingOptions::default().with_auto_captions(false);
        let doc = compose("a.docx", &options, &sample_figures(), None);
        assert!(doc.figure_blocks().all(|b| b.caption.is_none()));
        let figures = doc.section(SectionKind::Figures).unwrap();
        match &figures.body[0] {
            Block::Paragraph(p) => assert!(p.text.ends_with("sem legendas automáticas.")),
            other => panic!("expected intro paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_body_text_replaces_placeholder() {
        let doc = compose(
            "a.docx",
            &FormattingOptions::default(),
            &[],
            Some("Primeiro.\n\nSegundo."),
        );
        let intro = doc.section(SectionKind::Introduction).unwrap();
        let texts: Vec<&str> = intro
            .body
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[1], "Primeiro.");
        assert!(!texts.contains(&PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_blank_body_text_keeps_placeholder() {
        let doc = compose("a.docx", &FormattingOptions::default(), &[], Some("  "));
        let intro = doc.section(SectionKind::Introduction).unwrap();
        assert!(intro
            .body
            .contains(&Block::Paragraph(Paragraph::body(PLACEHOLDER_TEXT))));
    }

    #[test]
    fn test_page_break_before_first_section() {
        let doc = compose("a.docx", &FormattingOptions::default(), &[], None);
        let intro = doc.section(SectionKind::Introduction).unwrap();
        assert_eq!(intro.body[0], Block::PageBreak);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let figures = sample_figures();
        let options = FormattingOptions::default();
        assert_eq!(
            compose("x.doc", &options, &figures, Some("texto")),
            compose("x.doc", &options, &figures, Some("texto"))
        );
    }
}
