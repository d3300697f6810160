//! Error types for the sheet source crate.

use thiserror::Error;

/// Errors that can occur while fetching project records.
///
/// The `Display` text is what the dashboard shows to users, so each variant
/// renders as a readable message.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The endpoint's `message` field, or a generic failure text
        message: String,
    },

    /// The endpoint answered 2xx but the body is not a list of records.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl SourceError {
    /// HTTP status of the failed response, if the endpoint answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Status { status, .. } => Some(*status),
            SourceError::Network(err) => err.status().map(|s| s.as_u16()),
            SourceError::InvalidPayload(_) => None,
        }
    }
}
