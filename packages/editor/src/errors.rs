//! Error types for the editor store.

use crate::PersistenceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The raw-JSON replace path accepts any map but nothing else.
    #[error("replacement document must be a JSON object")]
    NotAnObject,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
