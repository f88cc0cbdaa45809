//! Modifier-flag normalization.

use rex_model::FlagError;

/// Deduplicate and validate a flag string against an allow-list.
///
/// Characters are kept once each, in first-seen order. Every rejected
/// character (unknown or repeated) produces one error in encounter order;
/// the caller decides whether those reach the user or only a developer
/// diagnostics channel. Never fails: the cleaned string is best-effort.
pub fn normalize(input: &str, allowed: &[char]) -> (String, Vec<FlagError>) {
    let mut clean = String::new();
    let mut errors = Vec::new();

    for ch in input.chars() {
        if !allowed.contains(&ch) {
            errors.push(FlagError::NotAllowed(ch));
        } else if clean.contains(ch) {
            errors.push(FlagError::Duplicate(ch));
        } else {
            clean.push(ch);
        }
    }

    (clean, errors)
}
