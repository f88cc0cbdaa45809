//! CLI argument definitions for the rex pattern tester.

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "rex",
    version,
    about = "Validate a regular expression and preview matches and replacements",
    long_about = "Validate a pattern/flags pair, then run it against sample text\n\
                  and print the matches and substitution output per sample.\n\
                  Non-native dialects skip the local run and print the inputs\n\
                  for an external engine instead."
)]
pub struct Cli {
    /// Regular expression pattern.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Modifier flags (e.g. "ig"); invalid characters are dropped with a
    /// warning.
    #[arg(short, long, default_value = "")]
    pub flags: String,

    /// Replacement template; backreferences use $1, $2, ...
    #[arg(short = 'r', long = "replace", default_value = "")]
    pub replacement: String,

    /// Sample text to test against; reads stdin when omitted.
    #[arg(short, long)]
    pub sample: Option<String>,

    /// Split the sample on new lines into independent samples.
    #[arg(long)]
    pub split: bool,

    /// Trim leading/trailing whitespace from each sample.
    #[arg(long)]
    pub trim: bool,

    /// Render whitespace in outputs as [TAB], [SPACE], [NEW LINE], [RETURN].
    #[arg(long = "show-whitespace")]
    pub show_whitespace: bool,

    /// Target a non-native regex dialect (no local run; prints the inputs
    /// for an external engine).
    #[arg(long = "not-native")]
    pub not_native: bool,

    /// Tolerate patterns the native engine rejects (non-native dialects
    /// only).
    #[arg(long = "allow-invalid")]
    pub allow_invalid: bool,

    /// Delimiter character for non-native dialects.
    #[arg(long, default_value_t = '/')]
    pub delimiter: char,

    /// The target dialect accepts paired bracket delimiters.
    #[arg(long = "paired-delimiters")]
    pub paired_delimiters: bool,

    /// Override the accepted flag characters.
    #[arg(long = "allowed-flags", value_name = "CHARS")]
    pub allowed_flags: Option<String>,

    /// Maximum pattern length before truncation.
    #[arg(long = "max-length", value_name = "N", default_value_t = 512)]
    pub max_length: usize,

    /// Emit the session snapshot as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}
