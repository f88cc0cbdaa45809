//! Error taxonomy for the pattern editor.
//!
//! Nothing here is fatal: every error degrades to "keep the previous good
//! state and report". Display strings are user-facing and are surfaced
//! verbatim by embedding front ends.

use thiserror::Error;

/// Per-character rejection reasons produced by flag normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlagError {
    /// The character is not in the session's allow-list.
    #[error("\"{0}\" is not a valid flag so was removed")]
    NotAllowed(char),
    /// The character already appeared earlier in the input.
    #[error("\"{0}\" was already listed so was removed")]
    Duplicate(char),
}

/// A requested delimiter character the resolver refused.
///
/// This is a configuration-time mistake by the embedder, not end-user
/// input; callers fall back to the default `/` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DelimiterError {
    #[error("\"{0}\" is not a valid delimiter")]
    Invalid(char),
}

/// Errors raised while handling editor input events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Input was longer than the configured maximum and was truncated.
    /// The truncated value is still committed.
    #[error("pattern exceeded {max} characters so was truncated")]
    LengthExceeded { max: usize },

    /// The native engine rejected the pattern. The message is the engine's
    /// own diagnostic.
    #[error("{message}")]
    PatternCompile { message: String },

    #[error(transparent)]
    Flag(#[from] FlagError),

    #[error(transparent)]
    Delimiter(#[from] DelimiterError),
}
