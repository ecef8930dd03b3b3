//! Storefront settings loaded via OrthoConfig.
//!
//! Values come from `STOREFRONT_*` environment variables and configuration
//! files; command-line flags are applied on top with
//! [`StorefrontSettings::with_overrides`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_PROFILE_DIR: &str = ".storefront";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unknown log format '{value}' (expected 'text' or 'json')")]
    UnknownLogFormat { value: String },
    #[error("path '{path}' is not valid UTF-8")]
    NonUtf8Path { path: String },
}

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(SettingsError::UnknownLogFormat {
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Configuration for the storefront binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Directory holding the profile document.
    pub profile_dir: Option<PathBuf>,
    /// Menu document to serve instead of the bundled menu.
    pub menu_path: Option<PathBuf>,
    /// Log output format, `text` or `json`.
    pub log_format: Option<String>,
}

impl StorefrontSettings {
    /// Return the profile directory, defaulting to `./.storefront`.
    pub fn profile_dir(&self) -> Result<Utf8PathBuf, SettingsError> {
        self.profile_dir
            .clone()
            .map_or_else(|| Ok(Utf8PathBuf::from(DEFAULT_PROFILE_DIR)), utf8)
    }

    /// Return the configured menu document, if any.
    pub fn menu_path(&self) -> Result<Option<Utf8PathBuf>, SettingsError> {
        self.menu_path.clone().map(utf8).transpose()
    }

    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), LogFormat::from_str)
    }

    /// Apply command-line values over the loaded settings.
    #[must_use]
    pub fn with_overrides(
        mut self,
        profile_dir: Option<PathBuf>,
        menu_path: Option<PathBuf>,
        log_format: Option<LogFormat>,
    ) -> Self {
        if profile_dir.is_some() {
            self.profile_dir = profile_dir;
        }
        if menu_path.is_some() {
            self.menu_path = menu_path;
        }
        if let Some(format) = log_format {
            self.log_format = Some(format.to_string());
        }
        self
    }
}

fn utf8(path: PathBuf) -> Result<Utf8PathBuf, SettingsError> {
    Utf8PathBuf::from_path_buf(path).map_err(|path| SettingsError::NonUtf8Path {
        path: path.to_string_lossy().into_owned(),
    })
}
