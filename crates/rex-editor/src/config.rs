//! Initialization parameters supplied by the embedding presentation layer.

use serde::{Deserialize, Serialize};

/// Default cap on pattern and replacement length.
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 512;

/// Everything an embedder can configure when opening an editor session.
///
/// Built once and handed to [`Editor::new`](crate::Editor::new);
/// configuration mistakes (bad delimiter, bad allowed-flags override) are
/// reported as developer-facing diagnostics at construction and degrade
/// to defaults, since the end user cannot correct them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Initial pattern; validated at construction when non-empty.
    pub pattern: String,
    /// Initial replacement template.
    pub replacement: String,
    /// Initial modifier flags; cleaned through the normalizer.
    pub flags: String,
    /// Maximum pattern/replacement length before truncation.
    pub max_pattern_length: usize,
    /// Override for the accepted flag set. Under a native dialect the
    /// override is itself checked against the native flag set.
    pub allowed_flags: Option<String>,
    /// True when the native engine is the authoritative dialect.
    pub dialect_is_native: bool,
    /// Requested delimiter character for non-native dialects.
    pub delimiter: char,
    /// Whether the target dialect accepts paired bracket delimiters.
    pub paired_delimiters: bool,
    /// Treat native-engine rejections as tolerated (non-native dialects
    /// only): commits still happen and change notifications still fire,
    /// with the engine's diagnostic retained as an advisory message.
    pub allow_invalid: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            replacement: String::new(),
            flags: String::new(),
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
            allowed_flags: None,
            dialect_is_native: true,
            delimiter: '/',
            paired_delimiters: false,
            allow_invalid: false,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }

    #[must_use]
    pub fn with_max_pattern_length(mut self, max: usize) -> Self {
        self.max_pattern_length = max;
        self
    }

    #[must_use]
    pub fn with_allowed_flags(mut self, allowed: impl Into<String>) -> Self {
        self.allowed_flags = Some(allowed.into());
        self
    }

    #[must_use]
    pub fn with_dialect_is_native(mut self, native: bool) -> Self {
        self.dialect_is_native = native;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_paired_delimiters(mut self, paired: bool) -> Self {
        self.paired_delimiters = paired;
        self
    }

    #[must_use]
    pub fn with_allow_invalid(mut self, allow: bool) -> Self {
        self.allow_invalid = allow;
        self
    }
}
