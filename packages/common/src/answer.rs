//! Answer comparison used by both the single-quiz check and random play.

/// Normalize an answer for comparison: trimmed and lowercased.
///
/// Accents are kept, so `"paris"` and `"París"` stay distinct.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Whether a submitted answer matches the stored one.
pub fn is_correct(submitted: &str, expected: &str) -> bool {
    normalize(submitted) == normalize(expected)
}
