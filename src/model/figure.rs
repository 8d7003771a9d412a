//! Figure types.

use serde::{Deserialize, Serialize};

/// Attribution line emitted under every caption.
pub const CAPTION_SOURCE: &str = "Fonte: Elaborado pelo autor (2024)";

/// A figure reported by the upstream extraction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    /// Identifier, unique within a document (1-based)
    pub id: u32,

    /// User-editable caption body
    #[serde(rename = "name")]
    pub display_name: String,

    /// Source asset the figure came from; never rendered
    #[serde(default)]
    pub original_name: String,
}

impl Figure {
    /// Create a new figure.
    pub fn new(id: u32, display_name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            original_name: original_name.into(),
        }
    }
}

/// A figure placed in the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureBlock {
    /// Id of the referenced [`Figure`] in the owning document
    pub figure_id: u32,

    /// Positional caption number (1-based)
    pub number: u32,

    /// Caption, present only when captions are enabled
    pub caption: Option<Caption>,
}

/// A resolved figure caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    /// Caption number
    pub number: u32,

    /// Caption body (the figure's display name)
    pub text: String,

    /// Attribution line
    pub source: String,
}

impl Caption {
    /// Create a caption with the default attribution line.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            source: CAPTION_SOURCE.to_string(),
        }
    }

    /// Caption label, e.g. `Figura 2`.
    pub fn label(&self) -> String {
        format!("Figura {}", self.number)
    }

    /// Full caption line, e.g. `Figura 2 - Diagrama de fluxo`.
    pub fn line(&self) -> String {
        format!("{} - {}", self.label(), self.text)
    }
}
