//! Password scoring sections
//!
//! Each section scores a specific aspect of password strength.

mod length;
mod pattern;
mod variety;

pub(crate) use length::length_section;
pub(crate) use pattern::{repetition_section, sequence_section};
pub(crate) use variety::variety_section;

/// Outcome of a scoring section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct SectionOutcome {
    /// Points awarded (positive) or deducted (negative) by the section.
    pub delta: i64,
    /// One suggestion per failed or weak criterion, in check order.
    pub feedback: Vec<String>,
}

impl SectionOutcome {
    pub fn award(delta: i64) -> Self {
        SectionOutcome {
            delta,
            feedback: Vec::new(),
        }
    }
}
