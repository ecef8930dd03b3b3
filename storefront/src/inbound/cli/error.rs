//! Error types for the storefront console adapter.

use std::io;

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::ports::{MenuSourceError, ProfileStoreError};
use crate::domain::{Feedback, SessionError};

/// Errors surfaced by a console command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config { message: String },
    /// Loaded settings were invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The profile store could not be opened.
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
    /// The menu could not be loaded.
    #[error(transparent)]
    Menu(#[from] MenuSourceError),
    /// The session gate refused the request; the payload is what the user
    /// would see.
    #[error("{0}")]
    Rejected(Feedback),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Feedback payload for rejected session requests.
    pub fn feedback(&self) -> Option<&Feedback> {
        match self {
            Self::Rejected(feedback) => Some(feedback),
            _ => None,
        }
    }
}

impl From<SessionError> for CliError {
    fn from(error: SessionError) -> Self {
        Self::Rejected(Feedback::from(error))
    }
}
