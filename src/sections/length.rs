//! Length section - awards the length tier and flags short passwords.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;
use crate::config::Config;

/// Awards the length tier points.
///
/// `good_length` or more characters earns the full award, `min_length` or
/// more the lesser one. Anything shorter earns nothing and generates a
/// feedback item naming the recommended minimum. Length is measured in
/// characters, not bytes.
pub(crate) fn length_section(password: &SecretString, config: &Config) -> SectionOutcome {
    let length = password.expose_secret().chars().count();

    if length >= config.good_length {
        SectionOutcome::award(config.points_good_length)
    } else if length >= config.min_length {
        SectionOutcome::award(config.points_min_length)
    } else {
        SectionOutcome {
            delta: 0,
            feedback: vec![format!(
                "Use at least {} characters ({}+ is better)",
                config.min_length, config.good_length
            )],
        }
    }
}
