//! Error handling utilities for the nbjrnlctl application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error used as the source of transport failures.
///
/// The production transport wraps `reqwest::Error`; test transports wrap
/// whatever error they fabricate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Represents specific error cases that can occur while loading configuration.
///
/// # Examples
///
/// Reporting every missing setting at once:
///
/// ```
/// use nbjrnlctl::errors::ConfigError;
///
/// let error = ConfigError::MissingSettings(vec![
///     "NETBOX_URL".to_string(),
///     "NETBOX_API_TOKEN".to_string(),
/// ]);
///
/// let message = format!("{}", error);
/// assert!(message.contains("NETBOX_URL"));
/// assert!(message.contains("NETBOX_API_TOKEN"));
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required settings have no value in any source.
    #[error("Missing required settings: {}. Set them in the environment or in the config file.", .0.join(", "))]
    MissingSettings(Vec<String>),

    /// The NetBox URL is not an http(s) URL.
    #[error("Invalid NetBox URL '{0}': it must start with http:// or https://")]
    InvalidUrl(String),

    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    File {
        /// Path of the config file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON of the expected shape.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The config file path could not be expanded.
    #[error("Failed to expand config path '{0}'")]
    PathExpansion(String),
}

/// Represents all possible errors that can occur in the nbjrnlctl application.
///
/// Remote-facing variants carry the operation name and the target identifier
/// so that a failure can be reported to a human without further context.
///
/// # Examples
///
/// ```
/// use nbjrnlctl::errors::AppError;
///
/// let error = AppError::Remote {
///     operation: "get journal entry",
///     target: "42".to_string(),
///     status: 404,
///     message: String::new(),
/// };
/// assert!(error.is_not_found());
/// assert!(format!("{}", error).contains("404"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request never produced an HTTP response.
    #[error("Failed to {operation} ({target}): {source}")]
    Transport {
        /// Operation being performed
        operation: &'static str,
        /// URL or identifier the operation targeted
        target: String,
        /// The underlying transport error
        #[source]
        source: BoxError,
    },

    /// The service answered with an unexpected status code.
    #[error("Failed to {operation} ({target}): unexpected status code: {status}{}", format_message(.message))]
    Remote {
        /// Operation being performed
        operation: &'static str,
        /// URL or identifier the operation targeted
        target: String,
        /// HTTP status code returned by the service
        status: u16,
        /// Response body or error summary, possibly empty
        message: String,
    },

    /// Nothing on the remote side matches the requested identifier.
    #[error("No {what} found with {target}")]
    NotFound {
        /// Kind of object searched for
        what: &'static str,
        /// Human-readable description of the lookup key
        target: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response to {operation} ({target}): {source}")]
    Decode {
        /// Operation being performed
        operation: &'static str,
        /// URL or identifier the operation targeted
        target: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid user input.
    #[error("{0}")]
    Argument(String),

    /// Input/output errors from terminal interaction.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_message(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

impl AppError {
    /// Returns true when the error means the target does not exist remotely.
    ///
    /// Covers both an explicit `NotFound` and an HTTP 404 from the service.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound { .. } | AppError::Remote { status: 404, .. }
        )
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use nbjrnlctl::errors::{AppResult, AppError};
///
/// fn parse_positive(raw: &str) -> AppResult<u64> {
///     raw.parse()
///         .map_err(|_| AppError::Argument(format!("not a number: {}", raw)))
/// }
///
/// assert!(parse_positive("12").is_ok());
/// assert!(parse_positive("twelve").is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;
