//! Rendering of test-run results to stdout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use rex_editor::EditorSnapshot;
use rex_model::SampleResult;

/// Print one row per processed sample: the sample, its matches, and the
/// substitution output.
pub fn print_table(results: &[SampleResult]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Sample", "Matches", "Output"]);
    for result in results {
        let matches = if result.matches.is_empty() {
            "(no match)".to_string()
        } else {
            result
                .matches
                .iter()
                .map(|m| format!("\"{m}\""))
                .collect::<Vec<_>>()
                .join("\n")
        };
        table.add_row(vec![
            result.sample.clone(),
            matches,
            result.output.clone(),
        ]);
    }
    println!("{table}");
}

/// Serialize the whole session snapshot for machine consumption.
pub fn print_json(snapshot: &EditorSnapshot) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}
