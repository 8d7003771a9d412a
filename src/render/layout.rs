//! Concrete page geometry and typography derived from formatting options.

use crate::options::{FontFamily, FontSize, FormattingOptions, LineSpacing, MarginPreset};

/// Value shown by the page-number marker.
///
/// Pagination is not computed; the marker always reads `1`.
pub const PAGE_NUMBER_MARKER: &str = "1";

/// First-line indent for body paragraphs, in centimeters.
pub const PARAGRAPH_INDENT_CM: f32 = 1.25;

/// Page margins in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Right margin
    pub right: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
}

impl Margins {
    /// Same distance on all four sides.
    pub fn uniform(cm: f32) -> Self {
        Self {
            top: cm,
            right: cm,
            bottom: cm,
            left: cm,
        }
    }

    /// Margins for a preset.
    pub fn from_preset(preset: MarginPreset) -> Self {
        match preset {
            MarginPreset::Abnt => Self {
                top: 3.0,
                right: 2.0,
                bottom: 2.0,
                left: 3.0,
            },
            MarginPreset::Normal => Self::uniform(2.5),
        }
    }

    /// Check if all four sides are equal.
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }

    /// CSS `margin` value in top/right/bottom/left order.
    pub fn to_css(&self) -> String {
        if self.is_uniform() {
            format!("{}cm", self.top)
        } else {
            format!(
                "{}cm {}cm {}cm {}cm",
                self.top, self.right, self.bottom, self.left
            )
        }
    }
}

/// Line-height multiplier used for a spacing choice.
///
/// These approximate the visual density of ABNT spacing in browser layout
/// rather than the literal ratio.
pub fn line_height(spacing: LineSpacing) -> f32 {
    match spacing {
        LineSpacing::Single => 1.4,
        LineSpacing::OneAndHalf => 1.8,
        LineSpacing::Double => 2.4,
    }
}

/// Resolved layout primitives for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Page margins
    pub margins: Margins,
    /// Line-height multiplier
    pub line_height: f32,
    /// Body font family
    pub font_family: FontFamily,
    /// Body font size
    pub font_size: FontSize,
    /// Emit the running header
    pub header: bool,
    /// Emit the page-number marker
    pub page_number: bool,
}

impl PageLayout {
    /// Derive the layout from formatting options.
    pub fn from_options(options: &FormattingOptions) -> Self {
        Self {
            margins: Margins::from_preset(options.margins),
            line_height: line_height(options.line_spacing),
            font_family: options.font_family,
            font_size: options.font_size,
            header: options.header_footer,
            page_number: options.page_numbers,
        }
    }

    /// CSS `font-family` value with a generic fallback.
    pub fn font_stack(&self) -> String {
        format!(
            "'{}', {}",
            self.font_family.as_str(),
            self.font_family.generic()
        )
    }
}
