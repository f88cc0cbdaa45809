//! Editor state controller for the rex pattern editor.
//!
//! The controller owns the session's [`PatternState`] and
//! [`TestRunConfig`], reacts to input events from a presentation layer,
//! and reports committed changes back as [`Notification`] values. It is
//! single-threaded and synchronous: one event is handled to completion
//! before the next is accepted, and embedders wanting multiple sessions
//! create one controller per session.

pub mod config;
mod editor;

pub use config::EditorConfig;
pub use editor::{Editor, EditorSnapshot, Notification};
