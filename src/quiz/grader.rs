/// Trim surrounding whitespace and lowercase. Idempotent; kana pass through unchanged.
pub fn normalize_answer(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Exact match after normalization. No partial credit.
pub fn is_correct_choice(given: &str, correct: &str) -> bool {
    normalize_answer(given) == normalize_answer(correct)
}
