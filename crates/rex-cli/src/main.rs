//! rex: one-shot regex pattern tester built on the editor core.

use std::io::Read;

use anyhow::Context;
use clap::Parser;

use rex_editor::{Editor, EditorConfig, Notification};

mod cli;
mod logging;
mod report;

use crate::cli::Cli;
use crate::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter());
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let mut config = EditorConfig::new()
        .with_pattern(cli.pattern.as_str())
        .with_flags(cli.flags.as_str())
        .with_replacement(cli.replacement.as_str())
        .with_max_pattern_length(cli.max_length)
        .with_dialect_is_native(!cli.not_native)
        .with_delimiter(cli.delimiter)
        .with_paired_delimiters(cli.paired_delimiters)
        .with_allow_invalid(cli.allow_invalid);
    if let Some(allowed) = &cli.allowed_flags {
        config = config.with_allowed_flags(allowed.as_str());
    }

    let mut editor = Editor::new(config);

    let state = editor.pattern_state();
    if !state.is_valid {
        eprintln!("invalid pattern: {}", state.error_message);
        return Ok(1);
    }
    if !state.error_message.is_empty() {
        // Tolerated under --allow-invalid; advisory only.
        eprintln!("warning: {}", state.error_message);
    }

    let sample = match &cli.sample {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };
    editor.sample_edited(&sample);
    editor.set_split_on_newline(cli.split);
    editor.set_trim_each_sample(cli.trim);
    editor.set_show_whitespace_markers(cli.show_whitespace);

    tracing::info!(regex = %editor.display_regex(), "running test");

    match editor.request_test() {
        Some(Notification::RunExternally {
            pattern,
            flags,
            replacement,
            sample,
        }) => {
            // The authoritative engine lives outside this tool.
            println!("pattern:     {pattern}");
            println!("flags:       {flags}");
            println!("replacement: {replacement}");
            println!("sample:      {sample}");
        }
        _ => {
            if cli.json {
                report::print_json(&editor.snapshot())?;
            } else {
                report::print_table(editor.results());
            }
        }
    }
    Ok(0)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading sample from stdin")?;
    Ok(buffer)
}
