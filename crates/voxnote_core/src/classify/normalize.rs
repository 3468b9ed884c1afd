//! Utterance normalization.

/// Trims leading and trailing Unicode whitespace.
///
/// Case is preserved; every rule matches case-insensitively.
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}
