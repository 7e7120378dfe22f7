/*!
 * Error types for the polypress application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
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
        message: String,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur when talking to the hosted content store
#[derive(Error, Debug)]
pub enum ContentError {
    /// The query or mutation request could not be sent
    #[error("Content store request failed: {0}")]
    RequestFailed(String),

    /// The content store response could not be parsed
    #[error("Failed to parse content store response: {0}")]
    ParseError(String),

    /// The content store answered with a non-success status
    #[error("Content store responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the store
        message: String,
    },
}

/// Errors that can occur when mapping a fetched record to a document
#[derive(Error, Debug)]
pub enum RecordError {
    /// A required field was empty or missing on the fetched record
    #[error("record {id} is missing required field '{field}'")]
    MissingField {
        /// Identifier of the offending record
        id: String,
        /// Name of the missing field
        field: &'static str,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the content store
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Error from record validation
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
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
