//! Character variety section - scores uppercase, lowercase, digits and special chars.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;
use crate::config::Config;

/// Awards points for each character class present.
///
/// Classes are checked in a fixed order: uppercase, lowercase, digits,
/// special. Each missing class generates one feedback item.
pub(crate) fn variety_section(password: &SecretString, config: &Config) -> SectionOutcome {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| config.special_chars.contains(c));

    let classes = [
        (has_upper, config.points_upper, "Add uppercase letters"),
        (has_lower, config.points_lower, "Add lowercase letters"),
        (has_digit, config.points_digit, "Add numbers"),
        (
            has_special,
            config.points_special,
            "Add special characters (!@#...)",
        ),
    ];

    let mut outcome = SectionOutcome::default();
    for (present, points, suggestion) in classes {
        if present {
            outcome.delta += points;
        } else {
            outcome.feedback.push(suggestion.to_string());
        }
    }
    outcome
}
