//! Transient outputs: validation verdicts and per-sample test results.

use serde::{Deserialize, Serialize};

/// Outcome of a pattern compile attempt, converted to a plain value.
///
/// When the allow-invalid override is active a rejected pattern still
/// reports `ok = true` while keeping the engine's diagnostic in
/// `error_message`; consumers decide whether to treat that as "valid with
/// advisory message" or "invalid but tolerated". Both fields are always
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub error_message: String,
}

impl ValidationResult {
    /// A clean pass: valid pattern, no message.
    pub fn ok() -> Self {
        Self {
            ok: true,
            error_message: String::new(),
        }
    }
}

/// Match and replacement output for one processed sample string.
///
/// Recomputed in full on every test run; there is no identity carried
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleResult {
    /// The sample as processed (after any trimming).
    pub sample: String,
    /// Matched substrings in match order; empty when nothing matched.
    pub matches: Vec<String>,
    /// Substitution output, optionally with whitespace rendered as
    /// printable tokens.
    pub output: String,
}
