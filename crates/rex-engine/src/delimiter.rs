//! Delimiter resolution for non-native regex dialects.

use rex_model::{DelimiterError, DelimiterPair};

/// Determine the open/close delimiter pair for a session.
///
/// Native-dialect sessions always use `('/', '/')` regardless of the
/// request. Otherwise the requested character must not be alphanumeric,
/// whitespace, or a backslash. When paired delimiters are allowed, either
/// half of a bracket pair maps to the canonical pair; any other accepted
/// character maps to the symmetric `(c, c)`.
///
/// An `Err` here is an embedder configuration mistake; callers fall back
/// to the default pair.
pub fn resolve(
    requested: char,
    paired_allowed: bool,
    dialect_is_native: bool,
) -> Result<DelimiterPair, DelimiterError> {
    if dialect_is_native {
        return Ok(DelimiterPair::default());
    }
    if requested.is_alphanumeric() || requested.is_whitespace() || requested == '\\' {
        return Err(DelimiterError::Invalid(requested));
    }
    if !paired_allowed {
        return Ok(DelimiterPair {
            open: requested,
            close: requested,
        });
    }
    let (open, close) = match requested {
        '{' | '}' => ('{', '}'),
        '(' | ')' => ('(', ')'),
        '[' | ']' => ('[', ']'),
        '<' | '>' => ('<', '>'),
        other => (other, other),
    };
    Ok(DelimiterPair { open, close })
}
