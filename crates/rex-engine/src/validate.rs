//! Pattern validation against the native `regex` engine.
//!
//! A compile attempt never propagates past this boundary: failures are
//! converted to a [`ValidationResult`] value with the engine's diagnostic
//! captured for display.

use regex::{Regex, RegexBuilder};

use rex_model::{EditorError, ValidationResult};

/// A successfully compiled pattern plus the match-all behavior carried by
/// the `g` flag, which has no engine-level equivalent.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    global: bool,
}

impl CompiledPattern {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// True when the `g` flag was present: match and replace every
    /// occurrence rather than only the first.
    pub fn is_global(&self) -> bool {
        self.global
    }
}

/// Compile a pattern with a modifier-flag string.
///
/// Flag translation onto the engine: `i` case-insensitive, `m` multi-line,
/// `s` dot-matches-newline, `u` unicode (already the engine default).
/// `g` is recorded on the result rather than passed to the engine.
/// `d`, `y`, and any dialect-foreign flag have no native equivalent and
/// are ignored here; the normalizer is responsible for rejecting
/// characters outside the session allow-list.
pub fn compile(pattern: &str, flags: &str) -> Result<CompiledPattern, EditorError> {
    let mut builder = RegexBuilder::new(pattern);
    let mut global = false;
    for ch in flags.chars() {
        match ch {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'u' => {
                builder.unicode(true);
            }
            'g' => global = true,
            _ => {}
        }
    }
    let regex = builder.build().map_err(|err| {
        tracing::debug!(pattern, flags, "pattern rejected by engine");
        EditorError::PatternCompile {
            message: err.to_string(),
        }
    })?;
    Ok(CompiledPattern { regex, global })
}

/// Attempt to compile `pattern` with `flags`, reporting the outcome as a
/// value.
///
/// On failure the engine's diagnostic is captured with its first letter
/// capitalized for display, and `ok` is set to `allow_invalid_override`:
/// a non-native dialect may accept patterns the native engine rejects, so
/// an opted-in caller still sees `ok = true` alongside the advisory
/// message. Without the override an invalid pattern is always `ok = false`.
pub fn validate(pattern: &str, flags: &str, allow_invalid_override: bool) -> ValidationResult {
    match compile(pattern, flags) {
        Ok(_) => ValidationResult::ok(),
        Err(err) => ValidationResult {
            ok: allow_invalid_override,
            error_message: capitalize_first(&err.to_string()),
        },
    }
}

/// Uppercase the first alphabetic character of a diagnostic, leaving any
/// leading non-letters in place.
pub fn capitalize_first(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut done = false;
    for ch in input.chars() {
        if !done && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            done = true;
        } else {
            out.push(ch);
        }
    }
    out
}
