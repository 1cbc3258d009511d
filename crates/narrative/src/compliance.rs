//! Wording checks for externally visible text.

/// Substrings that must never appear in generated text, compared
/// case-insensitively. Metric vocabulary leaks raw figures and the trading
/// verbs read as advice.
pub const FORBIDDEN_TERMS: [&str; 10] = [
    "margin",
    "ratio",
    "coverage",
    "multiple",
    "roic",
    "buy",
    "sell",
    "hold",
    "target",
    "recommend",
];

/// First problem found in `text`, if any.
///
/// Returns the matched forbidden term, or `"numeric value"` when the text
/// contains a digit.
#[must_use]
pub fn forbidden_term(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    if let Some(term) = FORBIDDEN_TERMS.into_iter().find(|t| lower.contains(t)) {
        return Some(term);
    }
    text.chars()
        .any(|c| c.is_ascii_digit())
        .then_some("numeric value")
}
