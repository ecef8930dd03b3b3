//! Error types for the menu-data crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading a menu document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuDataError {
    /// The menu file could not be read.
    #[error("failed to read menu file at '{path}': {message}")]
    IoError {
        /// Path to the menu file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The menu JSON is malformed or missing required fields.
    #[error("invalid menu JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },
}
