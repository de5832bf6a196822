//! Error types for the document crate.
//!
//! The merge itself is total and raises nothing; errors here come only from
//! the JSON-mode reconciliation boundary, where user-typed text enters the
//! system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("JSON root must be an object, found {found}")]
    RootNotAnObject { found: &'static str },

    #[error("unknown module: {0}")]
    UnknownModule(String),
}
