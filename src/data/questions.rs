//! Built-in question set.
//!
//! The deployed question set normally comes from the surrounding content
//! layer; this compiled-in default keeps the binary and the tests usable
//! without external files. Each entry is `(prompt, base rate, category)`,
//! where the prompt doubles as the stable question id and the base rate is
//! the estimated share of the world population answering "yes".

use crate::domain::QuestionItem;

const DEFAULT_QUESTIONS: &[(&str, f64, &str)] = &[
    ("Have you ever traveled to another country?", 0.35, "travel"),
    ("Have you ever flown on an airplane?", 0.20, "travel"),
    ("Do you hold a university degree?", 0.15, "education"),
    ("Have you read a book in the last year?", 0.50, "education"),
    ("Do you speak more than one language?", 0.43, "skills"),
    ("Can you swim?", 0.55, "skills"),
    ("Have you ever written a computer program?", 0.05, "skills"),
    ("Do you have access to the internet at home?", 0.65, "wealth"),
    ("Do you own the home you live in?", 0.35, "wealth"),
    ("Do you own a car?", 0.18, "wealth"),
    ("Have you ever run a marathon?", 0.01, "experience"),
    ("Have you ever started a business?", 0.08, "experience"),
];

/// The compiled-in default question set.
pub fn default_question_set() -> Vec<QuestionItem> {
    DEFAULT_QUESTIONS
        .iter()
        .map(|&(id, base_rate, category)| QuestionItem {
            id: id.to_string(),
            base_rate,
            category: category.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_valid_base_rates() {
        let questions = default_question_set();
        assert!(!questions.is_empty());
        for q in &questions {
            assert!(
                q.base_rate > 0.0 && q.base_rate < 1.0,
                "base rate for '{}' must be inside (0, 1)",
                q.id
            );
            assert!(!q.category.is_empty());
        }
    }

    #[test]
    fn default_set_ids_are_unique() {
        let questions = default_question_set();
        for (i, a) in questions.iter().enumerate() {
            for b in &questions[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate question id '{}'", a.id);
            }
        }
    }
}
