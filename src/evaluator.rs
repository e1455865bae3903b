//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::config::Config;
use crate::sections::{
    SectionOutcome, length_section, repetition_section, sequence_section, variety_section,
};
use crate::types::Evaluation;

/// Evaluates password strength against a scoring config.
///
/// Pure and total: every input string, including the empty string, produces
/// an [`Evaluation`]. The final score is the sum of section awards minus
/// penalties, floored only if the config asks for it. Feedback items appear
/// in check order: length, character classes, sequence, repetition.
///
/// The config is assumed valid; call [`Config::validate`] once at startup.
pub fn evaluate(password: &SecretString, config: &Config) -> Evaluation {
    let mut score: i64 = 0;
    let mut feedback = Vec::new();

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString, &Config) -> SectionOutcome); 4] = [
        ("length", length_section),
        ("variety", variety_section),
        ("sequence", sequence_section),
        ("repetition", repetition_section),
    ];

    for (section_name, section_fn) in sections {
        let outcome = section_fn(password, config);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            section = section_name,
            delta = outcome.delta,
            feedback_items = outcome.feedback.len(),
            "section scored"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        score += outcome.delta;
        feedback.extend(outcome.feedback);
    }

    if let Some(floor) = config.score_floor {
        score = score.max(floor);
    }

    Evaluation {
        score,
        strength: config.rating_for(score),
        feedback,
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::types::Strength;
    use proptest::prelude::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn evaluate_is_total_on_arbitrary_input(ref input in ".{0,100}") {
            let config = Config::default();
            let evaluation = evaluate(&secret(input), &config);
            prop_assert!(Strength::ALL.contains(&evaluation.strength));
            prop_assert_eq!(evaluation.strength, config.rating_for(evaluation.score));
        }

        #[test]
        fn evaluate_is_idempotent(ref input in ".{0,100}") {
            let config = Config::default();
            let pwd = secret(input);
            prop_assert_eq!(evaluate(&pwd, &config), evaluate(&pwd, &config));
        }

        #[test]
        fn adding_a_class_never_lowers_the_score(ref input in "[a-z]{8,20}") {
            // Uppercasing the first character adds the uppercase class and
            // leaves length and sequence detection (case-folded) unchanged.
            let config = Config::default();
            let mut upper = input.clone();
            upper.replace_range(0..1, &input[0..1].to_ascii_uppercase());

            let a = evaluate(&secret(input), &config);
            let b = evaluate(&secret(&upper), &config);
            prop_assert!(b.score >= a.score);
            prop_assert!(b.strength >= a.strength);
        }
    }
}
