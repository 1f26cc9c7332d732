//! Text canonicalization for transcript comparison.

/// Punctuation stripped before comparison.
const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', '"', '\'', '-', ':', ';', '(', ')', '[', ']', '{', '}',
];

/// Canonicalize text into a comparison-safe form.
///
/// Strips punctuation, collapses whitespace runs to a single space,
/// lowercases, and trims. Idempotent, so already-canonical text passes
/// through unchanged.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !PUNCTUATION.contains(c)).collect();

    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
