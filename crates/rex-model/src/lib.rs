pub mod config;
pub mod error;
pub mod result;
pub mod state;

pub use config::{DelimiterPair, FlagConfig, NATIVE_FLAGS};
pub use error::{DelimiterError, EditorError, FlagError};
pub use result::{SampleResult, ValidationResult};
pub use state::{PatternState, TestRunConfig};
