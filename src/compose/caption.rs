//! Positional figure numbering.
//!
//! Caption numbers are assigned by position in the caller's figure order and
//! are independent of [`Figure::id`], so they stay contiguous when ids have
//! gaps.

use crate::model::{Caption, Figure};

/// A figure paired with its caption number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedFigure<'a> {
    /// The figure
    pub figure: &'a Figure,
    /// 1-based caption number
    pub number: u32,
}

impl NumberedFigure<'_> {
    /// Build the caption for this figure, or `None` when captions are off.
    pub fn caption(&self, auto_captions: bool) -> Option<Caption> {
        auto_captions.then(|| Caption::new(self.number, self.figure.display_name.clone()))
    }
}

/// Assign caption numbers `1..=n` in input order.
pub fn assign(figures: &[Figure]) -> Vec<NumberedFigure<'_>> {
    figures
        .iter()
        .zip(1u32..)
        .map(|(figure, number)| NumberedFigure { figure, number })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_ignore_ids() {
        let figures = vec![
            Figure::new(7, "a", "img7.png"),
            Figure::new(2, "b", "img2.png"),
            Figure::new(9, "c", "img9.png"),
        ];
        let numbered = assign(&figures);
        let numbers: Vec<u32> = numbered.iter().map(|n| n.number).collect();
        let ids: Vec<u32> = numbered.iter().map(|n| n.figure.id).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(ids, vec![7, 2, 9]);
    }

    #[test]
    fn test_empty_list() {
        assert!(assign(&[]).is_empty());
    }

    #[test]
    fn test_caption_follows_toggle() {
        let figures = vec![Figure::new(4, "Gráfico de resultados", "img004.png")];
        let numbered = assign(&figures);

        let caption = numbered[0].caption(true).unwrap();
        assert_eq!(caption.line(), "Figura 1 - Gráfico de resultados");
        assert!(numbered[0].caption(false).is_none());
    }
}
