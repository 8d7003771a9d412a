//! Section presence and numbering.

use crate::model::SectionKind;

/// A section kind with its assigned number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedSection {
    /// Which section
    pub kind: SectionKind,
    /// 1-based, contiguous number
    pub number: u32,
}

/// Sections present in a document, in order.
///
/// Introduction and Conclusion are always present; Figures only when the
/// document has at least one figure.
pub fn plan(has_figures: bool) -> Vec<SectionKind> {
    let mut kinds = vec![SectionKind::Introduction];
    if has_figures {
        kinds.push(SectionKind::Figures);
    }
    kinds.push(SectionKind::Conclusion);
    kinds
}

/// Number sections 1..=n in the given order.
pub fn number(kinds: &[SectionKind]) -> Vec<NumberedSection> {
    kinds
        .iter()
        .zip(1u32..)
        .map(|(&kind, number)| NumberedSection { kind, number })
        .collect()
}
