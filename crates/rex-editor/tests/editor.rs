//! Tests for the editor state controller: commit/notify policy, length
//! handling, dialect behavior, and the test-run lifecycle.

use rex_editor::{Editor, EditorConfig, Notification};
use rex_model::EditorError;

fn native_editor(pattern: &str, flags: &str) -> Editor {
    Editor::new(
        EditorConfig::new()
            .with_pattern(pattern)
            .with_flags(flags),
    )
}

// --- Pattern edit tests ---

#[test]
fn valid_edit_commits_and_notifies() {
    let mut editor = native_editor("", "");
    let note = editor.pattern_edited("[a-z]+");
    assert_eq!(note, Some(Notification::Changed));
    assert_eq!(editor.pattern_state().pattern, "[a-z]+");
    assert!(editor.pattern_state().is_valid);
}

#[test]
fn invalid_edit_keeps_previous_pattern_and_stays_silent() {
    let mut editor = native_editor("abc", "");
    let note = editor.pattern_edited("(");
    assert_eq!(note, None);
    assert_eq!(editor.pattern_state().pattern, "abc");
    assert!(!editor.pattern_state().is_valid);
    assert!(!editor.pattern_state().error_message.is_empty());
}

#[test]
fn recovery_after_invalid_edit_clears_the_error() {
    let mut editor = native_editor("abc", "");
    editor.pattern_edited("(");
    let note = editor.pattern_edited("(a)");
    assert_eq!(note, Some(Notification::Changed));
    assert!(editor.pattern_state().is_valid);
    assert!(editor.pattern_state().error_message.is_empty());
}

#[test]
fn unchanged_edit_does_not_notify() {
    let mut editor = native_editor("abc", "");
    assert_eq!(editor.pattern_edited("abc"), None);
}

#[test]
fn emptying_the_pattern_commits_without_validation() {
    let mut editor = native_editor("abc", "");
    let note = editor.pattern_edited("");
    assert_eq!(note, Some(Notification::Changed));
    assert!(editor.pattern_state().pattern.is_empty());
    assert!(editor.pattern_state().is_valid);
}

#[test]
fn overlong_edit_truncates_commits_prefix_and_surfaces_error() {
    let mut editor = Editor::new(EditorConfig::new().with_max_pattern_length(4));
    let note = editor.pattern_edited("abcdef");
    assert_eq!(note, Some(Notification::Changed));
    assert_eq!(editor.pattern_state().pattern, "abcd");
    assert_eq!(
        editor.edit_errors(),
        &[EditorError::LengthExceeded { max: 4 }]
    );
}

#[test]
fn truncation_error_clears_on_the_next_edit() {
    let mut editor = Editor::new(EditorConfig::new().with_max_pattern_length(4));
    editor.pattern_edited("abcdef");
    editor.pattern_edited("ok");
    assert!(editor.edit_errors().is_empty());
}

// --- Flags edit tests ---

#[test]
fn flags_edit_commits_cleaned_value_and_surfaces_reasons() {
    let mut editor = native_editor("a", "");
    let note = editor.flags_edited("gxg");
    assert_eq!(note, Some(Notification::Changed));
    assert_eq!(editor.pattern_state().flags, "g");
    let reasons: Vec<String> = editor.flag_errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        reasons,
        vec![
            "\"x\" is not a valid flag so was removed",
            "\"g\" was already listed so was removed",
        ]
    );
}

#[test]
fn flags_edit_without_net_change_does_not_notify() {
    let mut editor = native_editor("a", "ig");
    // "igx" cleans to "ig", same as the committed value.
    let note = editor.flags_edited("igx");
    assert_eq!(note, None);
    assert_eq!(editor.flag_errors().len(), 1);
}

#[test]
fn flags_edit_revalidates_the_pattern() {
    let mut editor = native_editor("(?<cap>a)", "");
    assert!(editor.pattern_state().is_valid);
    editor.flags_edited("i");
    assert!(editor.pattern_state().is_valid);
    assert_eq!(editor.pattern_state().flags, "i");
}

// --- Replacement edit tests ---

#[test]
fn replacement_commits_unconditionally() {
    let mut editor = native_editor("a", "");
    assert_eq!(
        editor.replacement_edited("$1"),
        Some(Notification::Changed)
    );
    assert_eq!(editor.pattern_state().replacement, "$1");
    assert_eq!(editor.replacement_edited("$1"), None);
}

#[test]
fn replacement_truncates_silently() {
    let mut editor = Editor::new(EditorConfig::new().with_max_pattern_length(3));
    editor.replacement_edited("abcdef");
    assert_eq!(editor.pattern_state().replacement, "abc");
    assert!(editor.edit_errors().is_empty());
}

// --- Test run tests ---

#[test]
fn blank_sample_makes_test_request_a_no_op() {
    let mut editor = native_editor("a", "g");
    editor.sample_edited("   \n  ");
    assert_eq!(editor.request_test(), None);
    assert!(editor.results().is_empty());
    assert!(!editor.test_panel_open());
}

#[test]
fn native_test_run_stores_results_and_opens_panel() {
    let mut editor = native_editor("a", "g");
    editor.replacement_edited("b");
    editor.sample_edited("banana");
    editor.request_test();
    assert!(editor.test_panel_open());
    assert_eq!(editor.results().len(), 1);
    assert_eq!(editor.results()[0].output, "bbnbnb");
}

#[test]
fn test_run_respects_split_and_trim_toggles() {
    let mut editor = native_editor("a", "g");
    editor.set_split_on_newline(true);
    editor.set_trim_each_sample(true);
    editor.sample_edited(" a \n b ");
    editor.request_test();
    let samples: Vec<&str> = editor.results().iter().map(|r| r.sample.as_str()).collect();
    assert_eq!(samples, vec!["a", "b"]);
}

#[test]
fn closing_the_panel_discards_results() {
    let mut editor = native_editor("a", "g");
    editor.sample_edited("banana");
    editor.request_test();
    assert!(!editor.results().is_empty());
    editor.toggle_test_panel();
    assert!(!editor.test_panel_open());
    assert!(editor.results().is_empty());
}

#[test]
fn invalid_session_never_runs_the_processor() {
    let mut editor = native_editor("(", "");
    assert!(!editor.pattern_state().is_valid);
    editor.sample_edited("banana");
    assert_eq!(editor.request_test(), None);
    assert!(editor.results().is_empty());
}

// --- Dialect tests ---

#[test]
fn non_native_test_request_hands_off_to_an_external_engine() {
    let mut editor = Editor::new(
        EditorConfig::new()
            .with_pattern("a+")
            .with_flags("g")
            .with_replacement("b")
            .with_dialect_is_native(false),
    );
    editor.sample_edited("aaa");
    let note = editor.request_test();
    assert_eq!(
        note,
        Some(Notification::RunExternally {
            pattern: "a+".to_string(),
            flags: "g".to_string(),
            replacement: "b".to_string(),
            sample: "aaa".to_string(),
        })
    );
    assert!(editor.results().is_empty());
}

#[test]
fn allow_invalid_override_tolerates_rejection_with_advisory_message() {
    let mut editor = Editor::new(
        EditorConfig::new()
            .with_dialect_is_native(false)
            .with_allow_invalid(true),
    );
    let note = editor.pattern_edited("(?P<broken");
    assert_eq!(note, Some(Notification::Changed));
    let state = editor.pattern_state();
    assert!(state.is_valid);
    assert_eq!(state.pattern, "(?P<broken");
    assert!(!state.error_message.is_empty());
}

#[test]
fn allow_invalid_is_ineffective_under_the_native_dialect() {
    let mut editor = Editor::new(EditorConfig::new().with_allow_invalid(true));
    assert_eq!(editor.pattern_edited("("), None);
    assert!(!editor.pattern_state().is_valid);
}

#[test]
fn initial_invalid_pattern_starts_the_session_invalid() {
    let editor = native_editor("(", "");
    assert!(!editor.pattern_state().is_valid);
    assert!(!editor.pattern_state().error_message.is_empty());
}

// --- Configuration tests ---

#[test]
fn display_regex_wraps_pattern_in_delimiters_and_flags() {
    let mut editor = Editor::new(
        EditorConfig::new()
            .with_dialect_is_native(false)
            .with_delimiter('{')
            .with_paired_delimiters(true),
    );
    editor.pattern_edited("a+");
    editor.flags_edited("ig");
    assert_eq!(editor.display_regex(), "{a+}ig");
}

#[test]
fn bad_delimiter_falls_back_to_slashes() {
    let editor = Editor::new(
        EditorConfig::new()
            .with_dialect_is_native(false)
            .with_delimiter('a'),
    );
    let pair = editor.delimiters();
    assert_eq!((pair.open, pair.close), ('/', '/'));
}

#[test]
fn allowed_flags_override_restricts_the_session() {
    let mut editor = Editor::new(EditorConfig::new().with_allowed_flags("ig"));
    editor.flags_edited("igm");
    assert_eq!(editor.pattern_state().flags, "ig");
    assert_eq!(editor.flag_errors().len(), 1);
}

#[test]
fn bad_native_override_keeps_the_native_set() {
    let mut editor = Editor::new(EditorConfig::new().with_allowed_flags("iqg"));
    // "q" is not a native flag, so the override is rejected wholesale.
    editor.flags_edited("m");
    assert_eq!(editor.pattern_state().flags, "m");
}

#[test]
fn non_native_override_is_taken_verbatim() {
    let mut editor = Editor::new(
        EditorConfig::new()
            .with_dialect_is_native(false)
            .with_allowed_flags("xU"),
    );
    editor.flags_edited("xUi");
    assert_eq!(editor.pattern_state().flags, "xU");
}

#[test]
fn initial_flags_are_cleaned_through_the_normalizer() {
    let editor = native_editor("a", "gqg");
    assert_eq!(editor.pattern_state().flags, "g");
}

#[test]
fn snapshot_carries_state_results_and_display_regex() {
    let mut editor = native_editor("a", "g");
    editor.sample_edited("banana");
    editor.request_test();
    let snapshot = editor.snapshot();
    assert_eq!(snapshot.pattern_state.pattern, "a");
    assert_eq!(snapshot.results.len(), 1);
    assert_eq!(snapshot.display_regex, "/a/g");
    let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
    assert!(json.contains("\"display_regex\""));
}
