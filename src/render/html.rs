//! HTML rendering with embedded print rules.

use crate::error::Result;
use crate::model::{Block, DocumentModel, DocumentSection, FigureBlock, Paragraph, Section};
use crate::naming;

use super::layout::{PageLayout, PAGE_NUMBER_MARKER, PARAGRAPH_INDENT_CM};
use super::{RenderStats, RenderedDocument};

/// Render a document model to a styled HTML document.
pub fn render(doc: &DocumentModel) -> Result<RenderedDocument> {
    HtmlRenderer::new(PageLayout::from_options(&doc.options)).render(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    layout: PageLayout,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a renderer for the given layout.
    pub fn new(layout: PageLayout) -> Self {
        Self {
            layout,
            stats: RenderStats::new(),
        }
    }

    /// Render a document, validating its structure first.
    pub fn render(mut self, doc: &DocumentModel) -> Result<RenderedDocument> {
        doc.check_structure()?;

        let mut output = String::new();
        self.render_head(&mut output, &doc.title);
        output.push_str("<body>\n");

        if self.layout.header {
            output.push_str(&format!(
                "  <div class=\"header\">{}</div>\n",
                escape_html(&doc.title)
            ));
        }
        if self.layout.page_number {
            output.push_str(&format!(
                "  <div class=\"page-number\">{}</div>\n",
                PAGE_NUMBER_MARKER
            ));
        }

        for section in &doc.sections {
            match section {
                DocumentSection::TitlePage { title, subtitle } => {
                    self.render_title_page(&mut output, title, subtitle)
                }
                DocumentSection::Section(s) => self.render_section(&mut output, s),
            }
        }

        output.push_str("</body>\n</html>\n");

        let filename = naming::output_filename(&doc.source_name);
        log::debug!(
            "Rendered '{}': {} bytes, {} sections, {} figures",
            filename,
            output.len(),
            self.stats.section_count,
            self.stats.figure_count
        );
        Ok(RenderedDocument::new(output, filename, self.stats))
    }

    fn render_head(&self, output: &mut String, title: &str) {
        output.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
        output.push_str("  <meta charset=\"UTF-8\">\n");
        output.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        output.push_str("  <style>\n");
        output.push_str(&self.stylesheet());
        output.push_str("  </style>\n</head>\n");
    }

    fn stylesheet(&self) -> String {
        format!(
            r#"    @page {{
      size: A4;
      margin: {margin};
    }}
    body {{
      font-family: {font};
      font-size: {size};
      line-height: {line_height};
      color: #000;
      text-align: justify;
    }}
    h1, h2 {{
      text-transform: uppercase;
      font-weight: bold;
      margin-top: 1.5cm;
      margin-bottom: 1cm;
    }}
    h1 {{ font-size: 14pt; text-align: center; }}
    h2 {{ font-size: 12pt; }}
    p {{
      text-indent: {indent}cm;
      margin-bottom: 0.5cm;
    }}
    .header, .page-number {{
      position: fixed;
      top: -2cm;
      right: 0;
      font-size: 10pt;
    }}
    .header {{ color: #666; }}
    .title-page {{
      text-align: center;
      padding-top: 8cm;
    }}
    .title-page h1 {{ margin-bottom: 3cm; }}
    .page-break {{ page-break-before: always; }}
    .figure {{ text-align: center; margin: 2cm 0; }}
    .figure-placeholder {{
      background: #f0f0f0;
      padding: 3cm;
      border: 1px solid #ddd;
      color: #666;
    }}
    .caption {{ font-size: 10pt; margin-top: 0.5cm; text-indent: 0; text-align: center; }}
    .source {{ font-size: 10pt; color: #666; text-indent: 0; text-align: center; }}
"#,
            margin = self.layout.margins.to_css(),
            font = self.layout.font_stack(),
            size = self.layout.font_size,
            line_height = self.layout.line_height,
            indent = PARAGRAPH_INDENT_CM,
        )
    }

    fn render_title_page(&mut self, output: &mut String, title: &str, subtitle: &Paragraph) {
        output.push_str("  <div class=\"title-page\">\n");
        output.push_str(&format!("    <h1>{}</h1>\n", escape_html(title)));
        self.render_paragraph(output, subtitle);
        output.push_str("  </div>\n");
    }

    fn render_section(&mut self, output: &mut String, section: &Section) {
        self.stats.add_section();

        // A leading page break belongs before the heading.
        let mut blocks = section.body.iter().peekable();
        while let Some(Block::PageBreak) = blocks.peek() {
            self.render_page_break(output);
            blocks.next();
        }

        output.push_str(&format!(
            "  <h2>{}</h2>\n",
            escape_html(&section.numbered_heading())
        ));

        for block in blocks {
            match block {
                Block::Paragraph(p) => self.render_paragraph(output, p),
                Block::Figure(fb) => self.render_figure(output, fb),
                Block::PageBreak => self.render_page_break(output),
            }
        }
    }

    fn render_page_break(&mut self, output: &mut String) {
        self.stats.add_page_break();
        output.push_str("  <div class=\"page-break\"></div>\n");
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }
        self.stats.add_paragraph(para.word_count());

        if para.style.is_body() {
            output.push_str(&format!("  <p>{}</p>\n", escape_html(&para.text)));
        } else {
            let indent = if para.style.first_line_indent {
                format!("{}cm", PARAGRAPH_INDENT_CM)
            } else {
                "0".to_string()
            };
            output.push_str(&format!(
                "  <p style=\"text-indent: {}; text-align: {};\">{}</p>\n",
                indent,
                para.style.alignment.as_css(),
                escape_html(&para.text)
            ));
        }
    }

    fn render_figure(&mut self, output: &mut String, block: &FigureBlock) {
        self.stats.add_figure(block.caption.is_some());

        output.push_str(&format!(
            "  <div class=\"figure\" data-figure-id=\"{}\">\n",
            block.figure_id
        ));
        output.push_str(&format!(
            "    <div class=\"figure-placeholder\">[ Imagem {} ]</div>\n",
            block.number
        ));
        if let Some(ref caption) = block.caption {
            output.push_str(&format!(
                "    <p class=\"caption\">{}</p>\n",
                escape_html(&caption.line())
            ));
            output.push_str(&format!(
                "    <p class=\"source\">{}</p>\n",
                escape_html(&caption.source)
            ));
        }
        output.push_str("  </div>\n");
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
