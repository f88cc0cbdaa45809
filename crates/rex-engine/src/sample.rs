//! The sample-transformation pipeline: split, trim, match, replace,
//! whitespace-render.

use rex_model::{SampleResult, TestRunConfig};

use crate::validate::CompiledPattern;

/// Whitespace-to-token substitutions, applied in this fixed order. The
/// tokens contain no whitespace, so earlier substitutions can never be
/// re-matched by later ones.
const WHITESPACE_TOKENS: [(&str, &str); 4] = [
    ("\t", "[TAB]"),
    (" ", "[SPACE]"),
    ("\n", "[NEW LINE]"),
    ("\r", "[RETURN]"),
];

/// Apply a compiled pattern and replacement template to sample text.
///
/// The sample text is split on line breaks when `split_on_newline` is set,
/// and each sample is independently trimmed when `trim_each_sample` is
/// set. One [`SampleResult`] is produced per sample, in input order.
///
/// Replacement backreferences use the native engine's `$1`/`$name`
/// convention. Taking a [`CompiledPattern`] encodes the precondition that
/// validation already succeeded; this component never re-validates.
pub fn run(
    compiled: &CompiledPattern,
    replacement: &str,
    sample_text: &str,
    config: &TestRunConfig,
) -> Vec<SampleResult> {
    let samples: Vec<&str> = if config.split_on_newline {
        sample_text.split('\n').collect()
    } else {
        vec![sample_text]
    };

    let results: Vec<SampleResult> = samples
        .into_iter()
        .map(|raw| {
            let sample = if config.trim_each_sample {
                raw.trim()
            } else {
                raw
            };
            let replaced = apply_replacement(compiled, sample, replacement);
            SampleResult {
                sample: sample.to_string(),
                matches: collect_matches(compiled, sample),
                output: if config.show_whitespace_markers {
                    show_whitespace(&replaced)
                } else {
                    replaced
                },
            }
        })
        .collect();

    tracing::debug!(samples = results.len(), "sample run complete");
    results
}

/// Matched substrings for one sample.
///
/// Global patterns yield every whole-match substring in order. Non-global
/// patterns mirror the host convention the editor was designed around:
/// the first whole match followed by its capture-group texts, with
/// non-participating groups rendered as empty strings.
fn collect_matches(compiled: &CompiledPattern, sample: &str) -> Vec<String> {
    if compiled.is_global() {
        return compiled
            .regex()
            .find_iter(sample)
            .map(|found| found.as_str().to_string())
            .collect();
    }
    match compiled.regex().captures(sample) {
        Some(caps) => caps
            .iter()
            .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    }
}

fn apply_replacement(compiled: &CompiledPattern, sample: &str, replacement: &str) -> String {
    if compiled.is_global() {
        compiled.regex().replace_all(sample, replacement).into_owned()
    } else {
        compiled.regex().replace(sample, replacement).into_owned()
    }
}

/// Replace whitespace with printable tokens so it survives display.
pub fn show_whitespace(input: &str) -> String {
    WHITESPACE_TOKENS
        .iter()
        .fold(input.to_string(), |acc, (from, to)| acc.replace(from, to))
}
