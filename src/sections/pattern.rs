//! Pattern sections - penalize sequential runs and repeated characters.

use secrecy::{ExposeSecret, SecretString};

use super::SectionOutcome;
use crate::config::Config;

/// Minimum run length that counts as a sequence or repetition.
const MIN_RUN: usize = 3;

fn is_stepped(window: &[char], step: i32) -> bool {
    window
        .windows(2)
        .all(|pair| pair[1] as i32 - pair[0] as i32 == step)
}

/// Checks for a run of `MIN_RUN`+ consecutive letters or digits, ascending
/// or descending ("abc", "321", "xyz"). Letters are case-folded first, so
/// "AbC" counts. Mixed letter/digit windows never match.
fn has_sequence(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().map(|c| c.to_ascii_lowercase()).collect();
    chars.windows(MIN_RUN).any(|window| {
        let all_alpha = window.iter().all(|c| c.is_ascii_lowercase());
        let all_digit = window.iter().all(|c| c.is_ascii_digit());
        (all_alpha || all_digit) && (is_stepped(window, 1) || is_stepped(window, -1))
    })
}

/// Checks for the same character `MIN_RUN`+ times in a row ("aaa", "111").
fn has_repetition(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    chars
        .windows(MIN_RUN)
        .any(|window| window.iter().all(|c| *c == window[0]))
}

/// Applies the sequence penalty once if any qualifying run exists.
///
/// Multiple runs do not compound the penalty.
pub(crate) fn sequence_section(password: &SecretString, config: &Config) -> SectionOutcome {
    if has_sequence(password.expose_secret()) {
        SectionOutcome {
            delta: -config.penalty_sequence,
            feedback: vec!["Avoid simple sequences like 'abc' or '123'".to_string()],
        }
    } else {
        SectionOutcome::default()
    }
}

/// Applies the repetition penalty once if any character repeats enough.
///
/// Multiple repeated runs do not compound the penalty.
pub(crate) fn repetition_section(password: &SecretString, config: &Config) -> SectionOutcome {
    if has_repetition(password.expose_secret()) {
        SectionOutcome {
            delta: -config.penalty_repetition,
            feedback: vec!["Avoid repeated characters like 'aaa' or '111'".to_string()],
        }
    } else {
        SectionOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_has_sequence_ascending_letters() {
        assert!(has_sequence("xabcx"));
        assert!(has_sequence("xyz"));
    }

    #[test]
    fn test_has_sequence_descending() {
        assert!(has_sequence("321"));
        assert!(has_sequence("zyx"));
    }

    #[test]
    fn test_has_sequence_case_insensitive() {
        assert!(has_sequence("AbC"));
    }

    #[test]
    fn test_has_sequence_digits() {
        assert!(has_sequence("pass789word"));
    }

    #[test]
    fn test_no_sequence_in_repetition() {
        // repetition, not a sequence
        assert!(!has_sequence("1111"));
        assert!(!has_sequence("aaaa"));
    }

    #[test]
    fn test_no_sequence_across_classes() {
        // mixed letters and digits never form a run
        assert!(!has_sequence("yz0"));
        assert!(!has_sequence("xy9"));
    }

    #[test]
    fn test_no_sequence_when_broken() {
        assert!(!has_sequence("acegi"));
        assert!(!has_sequence("135"));
    }

    #[test]
    fn test_has_sequence_short_input() {
        assert!(!has_sequence("ab"));
        assert!(!has_sequence(""));
    }

    #[test]
    fn test_has_repetition() {
        assert!(has_repetition("aaa"));
        assert!(has_repetition("pass111word"));
        assert!(has_repetition("!!!x"));
    }

    #[test]
    fn test_has_repetition_negative() {
        assert!(!has_repetition("aab"));
        assert!(!has_repetition("abab"));
        assert!(!has_repetition("aa"));
        assert!(!has_repetition(""));
    }

    #[test]
    fn test_sequence_section_penalizes_once() {
        let config = Config::default();
        // two distinct sequences, one penalty
        let outcome = sequence_section(&secret("abc123"), &config);
        assert_eq!(outcome.delta, -config.penalty_sequence);
        assert_eq!(outcome.feedback.len(), 1);
    }

    #[test]
    fn test_sequence_section_clean_password() {
        let config = Config::default();
        let outcome = sequence_section(&secret("Rm7#qT2x"), &config);
        assert_eq!(outcome, SectionOutcome::default());
    }

    #[test]
    fn test_repetition_section_penalizes_once() {
        let config = Config::default();
        let outcome = repetition_section(&secret("aaaa1111"), &config);
        assert_eq!(outcome.delta, -config.penalty_repetition);
        assert_eq!(outcome.feedback.len(), 1);
    }

    #[test]
    fn test_repetition_section_clean_password() {
        let config = Config::default();
        let outcome = repetition_section(&secret("Rm7#qT2x"), &config);
        assert_eq!(outcome, SectionOutcome::default());
    }
}
