//! Immutable session configuration: the modifier-flag allow-list and the
//! delimiter pair used when rendering patterns for non-native dialects.

use serde::{Deserialize, Serialize};

/// Full modifier-flag set understood by the native engine session.
///
/// Mirrors the host convention the editor was designed around: `i` (case
/// insensitive), `g` (global), `d` (indices), `m` (multi line), `s` (dot
/// matches newline), `u` (unicode), `y` (sticky).
pub const NATIVE_FLAGS: [char; 7] = ['i', 'g', 'd', 'm', 's', 'u', 'y'];

/// Which modifier-flag characters a session accepts.
///
/// Set once at construction and never mutated afterwards. Non-native
/// dialects may carry an arbitrary allow-list; native sessions are
/// restricted to [`NATIVE_FLAGS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagConfig {
    /// Accepted flag characters, in presentation order.
    pub allowed: Vec<char>,
    /// True when the native engine is the authoritative dialect.
    pub dialect_is_native: bool,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            allowed: NATIVE_FLAGS.to_vec(),
            dialect_is_native: true,
        }
    }
}

impl FlagConfig {
    /// Placeholder string suggested to the user for an empty flags field:
    /// the first two allowed flags.
    pub fn placeholder(&self) -> String {
        self.allowed.iter().take(2).collect()
    }
}

/// Open/close delimiter characters wrapped around a pattern when it is
/// displayed for a non-native dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    pub open: char,
    pub close: char,
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self {
            open: '/',
            close: '/',
        }
    }
}
