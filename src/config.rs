//! Scoring configuration
//!
//! All thresholds, point values and penalties live in an explicit
//! immutable [`Config`] value passed into every evaluation.

use thiserror::Error;

use crate::types::Strength;

/// ASCII punctuation, the default set of characters counted as "special".
pub const DEFAULT_SPECIAL_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("good_length ({good_length}) must be greater than min_length ({min_length})")]
    LengthBounds {
        min_length: usize,
        good_length: usize,
    },
    #[error("rating thresholds must not be empty")]
    EmptyThresholds,
    #[error("rating threshold bounds must be strictly increasing (found {prev} before {next})")]
    UnorderedThresholds { prev: i64, next: i64 },
}

/// Immutable scoring parameters.
///
/// Construct with [`Config::default`] or a struct literal, then call
/// [`Config::validate`] once at startup. Evaluation itself never fails,
/// so a config is checked before first use rather than on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum acceptable password length, in characters.
    pub min_length: usize,
    /// Length at which the higher length award applies. Must exceed `min_length`.
    pub good_length: usize,
    /// Points for reaching `min_length` but not `good_length`.
    pub points_min_length: i64,
    /// Points for reaching `good_length`.
    pub points_good_length: i64,
    pub points_upper: i64,
    pub points_lower: i64,
    pub points_digit: i64,
    /// Special characters carry more weight than the other classes.
    pub points_special: i64,
    /// Deducted once if any 3+ ascending or descending run is found.
    pub penalty_sequence: i64,
    /// Deducted once if any character repeats 3+ times in a row.
    pub penalty_repetition: i64,
    /// `(lower_bound, rating)` pairs with strictly increasing bounds.
    /// The first entry is the catch-all for scores below every bound.
    pub thresholds: Vec<(i64, Strength)>,
    /// Characters counted as the "special" class.
    pub special_chars: String,
    /// Optional floor applied to the final score before the rating lookup.
    pub score_floor: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_length: 8,
            good_length: 12,
            points_min_length: 1,
            points_good_length: 2,
            points_upper: 1,
            points_lower: 1,
            points_digit: 1,
            points_special: 2,
            penalty_sequence: 1,
            penalty_repetition: 1,
            thresholds: vec![
                (0, Strength::VeryWeak),
                (2, Strength::Weak),
                (4, Strength::Moderate),
                (5, Strength::Strong),
                (6, Strength::VeryStrong),
            ],
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
            score_floor: None,
        }
    }
}

impl Config {
    /// Checks the config invariants.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `good_length <= min_length`
    /// - `thresholds` is empty
    /// - threshold bounds are not strictly increasing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.good_length <= self.min_length {
            return Err(ConfigError::LengthBounds {
                min_length: self.min_length,
                good_length: self.good_length,
            });
        }
        if self.thresholds.is_empty() {
            return Err(ConfigError::EmptyThresholds);
        }
        for pair in self.thresholds.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ConfigError::UnorderedThresholds {
                    prev: pair[0].0,
                    next: pair[1].0,
                });
            }
        }
        Ok(())
    }

    /// Returns the rating for a final score: the highest threshold whose
    /// bound does not exceed the score, or the first entry's rating as the
    /// catch-all below every bound.
    pub(crate) fn rating_for(&self, score: i64) -> Strength {
        self.thresholds
            .iter()
            .rev()
            .find(|(bound, _)| score >= *bound)
            .or_else(|| self.thresholds.first())
            .map(|(_, strength)| *strength)
            .unwrap_or(Strength::VeryWeak)
    }
}
