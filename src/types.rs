//! Core value types: strength labels and the evaluation result.

use std::fmt;

/// Password strength rating, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// All ratings in ascending order.
    pub const ALL: [Strength; 5] = [
        Strength::VeryWeak,
        Strength::Weak,
        Strength::Moderate,
        Strength::Strong,
        Strength::VeryStrong,
    ];
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Result of a single password evaluation.
///
/// `score` is the raw sum of awards minus penalties; it may be negative
/// unless the config sets a floor. `feedback` lists one suggestion per
/// failed or weak criterion, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: i64,
    pub strength: Strength,
    pub feedback: Vec<String>,
}
