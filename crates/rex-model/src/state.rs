//! Mutable editor session state, owned exclusively by the controller.

use serde::{Deserialize, Serialize};

/// The committed pattern, flags, and replacement template plus current
/// validity.
///
/// Invariant: `error_message` is non-empty exactly when `is_valid` is
/// false, except under the allow-invalid override where a tolerated
/// pattern keeps `is_valid = true` alongside the retained advisory
/// message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternState {
    pub pattern: String,
    pub flags: String,
    pub replacement: String,
    pub is_valid: bool,
    pub error_message: String,
}

/// User-toggled options shaping sample-processor input and output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunConfig {
    /// Split the sample text on line breaks into independent samples.
    pub split_on_newline: bool,
    /// Trim leading/trailing whitespace from each sample.
    pub trim_each_sample: bool,
    /// Render whitespace in the output as printable tokens.
    pub show_whitespace_markers: bool,
}
