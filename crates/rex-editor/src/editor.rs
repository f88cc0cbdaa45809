//! The controller itself: event handling, commit/notify policy, and the
//! read-only snapshot exposed to presentation layers.

use serde::Serialize;

use rex_engine::{delimiter, flags, sample, validate};
use rex_model::{
    DelimiterPair, EditorError, FlagConfig, NATIVE_FLAGS, PatternState, SampleResult,
    TestRunConfig, ValidationResult,
};

use crate::config::EditorConfig;

/// Signals the controller emits back to its embedder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The committed pattern, flags, or replacement actually changed to a
    /// new accepted value.
    Changed,
    /// A test was requested under a non-native dialect; the authoritative
    /// engine lives outside this core, so the embedder runs it with this
    /// payload.
    RunExternally {
        pattern: String,
        flags: String,
        replacement: String,
        sample: String,
    },
}

/// Read-only view of the session handed to presentation layers.
#[derive(Debug, Clone, Serialize)]
pub struct EditorSnapshot {
    pub pattern_state: PatternState,
    pub test_config: TestRunConfig,
    pub results: Vec<SampleResult>,
    pub flag_errors: Vec<String>,
    pub display_regex: String,
}

/// Long-lived controller for one editing session.
///
/// Owns the session state exclusively; all mutation happens through the
/// event methods below, each of which completes before returning. If the
/// host is multi-threaded these methods must be serialized externally.
#[derive(Debug)]
pub struct Editor {
    flag_config: FlagConfig,
    delimiters: DelimiterPair,
    state: PatternState,
    test_config: TestRunConfig,
    sample: String,
    results: Vec<SampleResult>,
    flag_errors: Vec<EditorError>,
    edit_errors: Vec<EditorError>,
    max_pattern_length: usize,
    allow_invalid: bool,
    test_panel_open: bool,
}

impl Editor {
    /// Open a session.
    ///
    /// Configuration mistakes are logged once as developer diagnostics
    /// and degrade to defaults: a rejected allowed-flags override keeps
    /// the native set, a rejected delimiter falls back to `('/', '/')`.
    /// A non-empty initial pattern is validated immediately, so the
    /// session may start in the invalid state.
    pub fn new(config: EditorConfig) -> Self {
        let flag_config = resolve_flag_config(&config);

        let delimiters = match delimiter::resolve(
            config.delimiter,
            config.paired_delimiters,
            config.dialect_is_native,
        ) {
            Ok(pair) => pair,
            Err(error) => {
                tracing::error!(%error, "falling back to default delimiter");
                DelimiterPair::default()
            }
        };

        let (clean_flags, flag_errors) = flags::normalize(&config.flags, &flag_config.allowed);
        for error in &flag_errors {
            tracing::warn!(%error, "initial flags cleaned");
        }

        let allow_invalid = !config.dialect_is_native && config.allow_invalid;

        let (pattern, _) = truncate_chars(&config.pattern, config.max_pattern_length);
        let (replacement, _) = truncate_chars(&config.replacement, config.max_pattern_length);

        let verdict = if pattern.is_empty() {
            ValidationResult::ok()
        } else {
            validate::validate(&pattern, &clean_flags, allow_invalid)
        };

        Self {
            flag_config,
            delimiters,
            state: PatternState {
                pattern,
                flags: clean_flags,
                replacement,
                is_valid: verdict.ok,
                error_message: verdict.error_message,
            },
            test_config: TestRunConfig::default(),
            sample: String::new(),
            results: Vec::new(),
            flag_errors: Vec::new(),
            edit_errors: Vec::new(),
            max_pattern_length: config.max_pattern_length,
            allow_invalid,
            test_panel_open: false,
        }
    }

    // --- Input events ---

    /// The pattern field was edited.
    ///
    /// Over-long input is truncated and surfaces a length-exceeded error
    /// regardless of regex validity; the committed value after an
    /// over-long edit is the truncated prefix. A pattern the validator
    /// rejects is not committed and emits no notification; the previous
    /// good pattern stays active.
    pub fn pattern_edited(&mut self, raw: &str) -> Option<Notification> {
        self.edit_errors.clear();
        let (text, truncated) = truncate_chars(raw, self.max_pattern_length);
        if truncated {
            self.edit_errors.push(EditorError::LengthExceeded {
                max: self.max_pattern_length,
            });
        }
        if text == self.state.pattern {
            return None;
        }
        if text.is_empty() {
            // An empty pattern cannot have an error.
            self.state.pattern = text;
            self.state.is_valid = true;
            self.state.error_message.clear();
            return Some(Notification::Changed);
        }
        let verdict = validate::validate(&text, &self.state.flags, self.allow_invalid);
        if !verdict.ok {
            self.state.is_valid = false;
            self.state.error_message = verdict.error_message;
            return None;
        }
        self.state.pattern = text;
        self.state.is_valid = true;
        self.state.error_message = verdict.error_message;
        Some(Notification::Changed)
    }

    /// The flags field was edited.
    ///
    /// The cleaned value is always committed; rejected characters are
    /// dropped silently from the committed string but their reasons stay
    /// available through [`flag_errors`](Self::flag_errors). A
    /// notification fires only when the committed string actually
    /// changed.
    pub fn flags_edited(&mut self, raw: &str) -> Option<Notification> {
        self.edit_errors.clear();
        let (clean, errors) = flags::normalize(raw, &self.flag_config.allowed);
        self.flag_errors = errors.into_iter().map(EditorError::from).collect();

        let changed = clean != self.state.flags;
        self.state.flags = clean;

        if !self.state.pattern.is_empty() {
            let verdict =
                validate::validate(&self.state.pattern, &self.state.flags, self.allow_invalid);
            self.state.is_valid = verdict.ok;
            self.state.error_message = verdict.error_message;
        }

        changed.then_some(Notification::Changed)
    }

    /// The replacement field was edited. No validity concept applies to
    /// the template itself; over-long input is truncated silently.
    pub fn replacement_edited(&mut self, raw: &str) -> Option<Notification> {
        self.edit_errors.clear();
        let (text, _) = truncate_chars(raw, self.max_pattern_length);
        let changed = text != self.state.replacement;
        self.state.replacement = text;
        changed.then_some(Notification::Changed)
    }

    /// The sample text was edited.
    pub fn sample_edited(&mut self, raw: &str) {
        self.sample = raw.to_string();
    }

    pub fn set_split_on_newline(&mut self, enabled: bool) {
        self.test_config.split_on_newline = enabled;
    }

    pub fn set_trim_each_sample(&mut self, enabled: bool) {
        self.test_config.trim_each_sample = enabled;
    }

    pub fn set_show_whitespace_markers(&mut self, enabled: bool) {
        self.test_config.show_whitespace_markers = enabled;
    }

    /// A test run was requested.
    ///
    /// Blank sample text is a no-op. Under a non-native dialect no local
    /// run happens; the current inputs are handed back for an external
    /// engine. Otherwise the sample processor runs when the session is
    /// currently valid, and the test panel opens with results available.
    pub fn request_test(&mut self) -> Option<Notification> {
        if self.sample.trim().is_empty() {
            return None;
        }
        if !self.flag_config.dialect_is_native {
            return Some(Notification::RunExternally {
                pattern: self.state.pattern.clone(),
                flags: self.state.flags.clone(),
                replacement: self.state.replacement.clone(),
                sample: self.sample.clone(),
            });
        }
        if !self.state.is_valid || !self.state.error_message.is_empty() {
            return None;
        }
        match validate::compile(&self.state.pattern, &self.state.flags) {
            Ok(compiled) => {
                self.results = sample::run(
                    &compiled,
                    &self.state.replacement,
                    &self.sample,
                    &self.test_config,
                );
                self.test_panel_open = true;
            }
            Err(error) => {
                // Unreachable while the validity invariant holds, but a
                // compile failure must still degrade to report-and-keep.
                self.state.is_valid = false;
                self.state.error_message = validate::capitalize_first(&error.to_string());
            }
        }
        None
    }

    /// Open or close the test panel. Closing discards computed results;
    /// they are never cached across panel sessions.
    pub fn toggle_test_panel(&mut self) {
        self.test_panel_open = !self.test_panel_open;
        if !self.test_panel_open {
            self.results.clear();
        }
    }

    // --- Read-only access ---

    pub fn pattern_state(&self) -> &PatternState {
        &self.state
    }

    pub fn test_config(&self) -> &TestRunConfig {
        &self.test_config
    }

    pub fn results(&self) -> &[SampleResult] {
        &self.results
    }

    pub fn sample(&self) -> &str {
        &self.sample
    }

    /// Rejection reasons from the most recent flags edit.
    pub fn flag_errors(&self) -> &[EditorError] {
        &self.flag_errors
    }

    /// Errors from the most recent pattern/replacement edit (length
    /// truncation), cleared on the next edit.
    pub fn edit_errors(&self) -> &[EditorError] {
        &self.edit_errors
    }

    pub fn flag_config(&self) -> &FlagConfig {
        &self.flag_config
    }

    pub fn delimiters(&self) -> DelimiterPair {
        self.delimiters
    }

    pub fn test_panel_open(&self) -> bool {
        self.test_panel_open
    }

    /// The whole expression as displayed: open delimiter, pattern, close
    /// delimiter, flags.
    pub fn display_regex(&self) -> String {
        format!(
            "{}{}{}{}",
            self.delimiters.open, self.state.pattern, self.delimiters.close, self.state.flags
        )
    }

    /// Clone out a serializable view of the session.
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            pattern_state: self.state.clone(),
            test_config: self.test_config,
            results: self.results.clone(),
            flag_errors: self.flag_errors.iter().map(|e| e.to_string()).collect(),
            display_regex: self.display_regex(),
        }
    }
}

/// Work out the session flag configuration from the embedder's override.
///
/// Under a native dialect the override is itself normalized against the
/// native flag set; any rejection is a developer mistake, logged once,
/// and the default set is kept. Non-native dialects take the override
/// verbatim since their flag vocabulary is not ours to judge.
fn resolve_flag_config(config: &EditorConfig) -> FlagConfig {
    let allowed = match &config.allowed_flags {
        Some(raw) if config.dialect_is_native => {
            let (clean, errors) = flags::normalize(raw, &NATIVE_FLAGS);
            if !errors.is_empty() {
                for error in &errors {
                    tracing::error!(%error, "allowed-flags override rejected");
                }
                NATIVE_FLAGS.to_vec()
            } else if clean.is_empty() {
                NATIVE_FLAGS.to_vec()
            } else {
                clean.chars().collect()
            }
        }
        Some(raw) => raw.chars().collect(),
        None => NATIVE_FLAGS.to_vec(),
    };
    FlagConfig {
        allowed,
        dialect_is_native: config.dialect_is_native,
    }
}

/// Truncate to at most `max` characters, reporting whether anything was
/// cut. Operates on characters, not bytes, so multi-byte input cannot be
/// split mid-scalar.
fn truncate_chars(raw: &str, max: usize) -> (String, bool) {
    if raw.chars().count() <= max {
        (raw.to_string(), false)
    } else {
        (raw.chars().take(max).collect(), true)
    }
}
