//! Paragraph-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text content
    pub text: String,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a body paragraph (justified, first line indented).
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ParagraphStyle::body(),
        }
    }

    /// Create a centered paragraph without indentation.
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ParagraphStyle {
                alignment: Alignment::Center,
                first_line_indent: false,
            },
        }
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    pub alignment: Alignment,

    /// Indent the first line
    pub first_line_indent: bool,
}

impl ParagraphStyle {
    /// Style for ABNT body text.
    pub fn body() -> Self {
        Self {
            alignment: Alignment::Justify,
            first_line_indent: true,
        }
    }

    /// Whether this matches the stylesheet's default `p` rule.
    pub fn is_body(&self) -> bool {
        *self == Self::body()
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Centered, used on the title page
    Center,
    /// Justified, used for body text
    Justify,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Center => "center",
            Alignment::Justify => "justify",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_paragraph_style() {
        let p = Paragraph::body("Texto corrido.");
        assert_eq!(p.style.alignment, Alignment::Justify);
        assert!(p.style.first_line_indent);
        assert!(p.style.is_body());
    }

    #[test]
    fn test_centered_paragraph() {
        let p = Paragraph::centered("Subtítulo");
        assert_eq!(p.style.alignment.as_css(), "center");
        assert!(!p.style.first_line_indent);
        assert!(!p.style.is_body());
    }

    #[test]
    fn test_empty_and_word_count() {
        assert!(Paragraph::body("  \n ").is_empty());
        assert_eq!(Paragraph::body("um dois  três").word_count(), 3);
    }
}
