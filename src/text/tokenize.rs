//! Interest text: field joining and whitespace tokenization.
//!
//! Matching is literal. Tokens are maximal runs of non-whitespace characters and
//! are never case-folded or stripped of punctuation, so `Chess` and `chess` are
//! different interests.

use std::collections::HashMap;

use crate::model::Student;

/// Join a student's three interest fields with single spaces, in field order.
///
/// A missing, empty or whitespace-only field contributes `placeholder` instead of
/// being dropped, so every student contributes the same number of fields to the
/// vocabulary pass.
pub fn combine(student: &Student, placeholder: &str) -> String {
    student
        .interests
        .iter()
        .map(|field| {
            field
                .as_deref()
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .unwrap_or(placeholder)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into whitespace-delimited tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Count token occurrences across all `texts`.
///
/// Counts are additive over the whole stream: a token appearing in ten texts
/// (or ten times in one) counts ten.
pub fn histogram<'a, I>(texts: I) -> HashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    for text in texts {
        for token in tokens(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

/// Whether `token` occurs as a whole token in `text`.
pub fn contains_token(text: &str, token: &str) -> bool {
    tokens(text).any(|t| t == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(fields: [Option<&str>; 3]) -> Student {
        Student::new(1, "Alice", fields.map(|f| f.map(str::to_string)))
    }

    #[test]
    fn combine_preserves_field_order() {
        let s = student([Some("chess"), Some("music"), Some("art")]);
        assert_eq!(combine(&s, "nan"), "chess music art");
    }

    #[test]
    fn combine_substitutes_missing_fields() {
        let s = student([Some("chess"), None, None]);
        assert_eq!(combine(&s, "nan"), "chess nan nan");
    }

    #[test]
    fn combine_substitutes_blank_fields() {
        let s = student([Some("chess"), Some(""), Some("  ")]);
        let combined = combine(&s, "nan");
        assert_eq!(combined, "chess nan nan");
        assert_eq!(tokens(&combined).count(), 3);
    }

    #[test]
    fn combine_does_not_normalize() {
        let s = student([Some("Chess"), Some("rock-climbing"), Some("AI!")]);
        assert_eq!(combine(&s, "nan"), "Chess rock-climbing AI!");
    }

    #[test]
    fn histogram_is_additive_and_case_sensitive() {
        let counts = histogram(["chess music", "chess  Chess", ""]);
        assert_eq!(counts.get("chess"), Some(&2));
        assert_eq!(counts.get("Chess"), Some(&1));
        assert_eq!(counts.get("music"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn token_membership_is_exact() {
        assert!(contains_token("chess music", "chess"));
        assert!(!contains_token("chessboard music", "chess"));
        assert!(!contains_token("", "chess"));
    }
}
