//! Error types for the todo application.

use crate::types::TodoId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur outside the reducers
///
/// Reducers themselves are total and never fail; these errors come from
/// parsing user input and decoding actions that crossed a process boundary.
#[derive(Error, Debug)]
pub enum TodoError {
    /// A visibility filter name was not recognised by the strict parser
    #[error("Unknown visibility filter: {0} (expected SHOW_ALL, SHOW_ACTIVE or SHOW_COMPLETED)")]
    UnknownFilter(String),

    /// An action could not be decoded from its wire shape
    #[error("Malformed action: {0}")]
    Decode(#[from] serde_json::Error),

    /// An actions file could not be read
    #[error("Failed to read actions from {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Todo text was empty or whitespace only
    #[error("Todo text cannot be blank")]
    BlankText,

    /// Replayed actions added two todos with the same id
    #[error("Duplicate todo id {0} in replayed actions")]
    DuplicateId(TodoId),

    /// Every id up to `u64::MAX` is taken
    #[error("No todo ids left to hand out")]
    IdsExhausted,
}
