/*!
 * Error types for the order-translator application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when calling a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request or the read of its response timed out
    #[error("The read operation timed out: {0}")]
    Timeout(String),

    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

impl ProviderError {
    /// Whether the failure is a timeout, the only kind worth retrying
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else if error.is_connect() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else if let Some(status) = error.status() {
            Self::ApiError {
                status_code: status.as_u16(),
                message: error.to_string(),
            }
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors raised by the spreadsheet and delimited-file conversion stages
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Artifact is absent, unreadable or malformed
    #[error("Failed to read {path:?}: {message}")]
    Read {
        /// Artifact being read
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Artifact could not be created or written
    #[error("Failed to write {path:?}: {message}")]
    Write {
        /// Artifact being written
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

impl ConversionError {
    pub fn read(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn write(path: impl AsRef<Path>, message: impl ToString) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Retry budget used up on timeouts
    #[error("Max retries reached after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        /// Attempts made
        attempts: u32,
        /// Error from the final attempt
        last_error: ProviderError,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a conversion stage
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
