//! Error types for level and settings input
//!
//! The simulation itself is infallible once a `Level` exists; errors only arise
//! where untyped data (JSON documents, files) enters the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A value did not have the shape an operation requires
    #[error("type argument error: expected {expected}, found {found}")]
    TypeArgument { expected: &'static str, found: String },
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn type_argument(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeArgument {
            expected,
            found: found.into(),
        }
    }
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
