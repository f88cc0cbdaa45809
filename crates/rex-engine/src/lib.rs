//! Core engine for the rex pattern editor.
//!
//! Four leaf components, each a pure function over plain values:
//! flag-set normalization, delimiter resolution, pattern validation
//! against the native `regex` engine, and the sample-transformation
//! pipeline (split, trim, match, replace, whitespace-render).

pub mod delimiter;
pub mod flags;
pub mod sample;
pub mod validate;

pub use delimiter::resolve;
pub use flags::normalize;
pub use sample::run;
pub use validate::{CompiledPattern, capitalize_first, compile, validate};
