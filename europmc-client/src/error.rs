use std::result;

use europmc_parser::ParseError;
use thiserror::Error;

/// Error types for Europe PMC client operations
#[derive(Error, Debug)]
pub enum EuropePmcError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Response body is not a parseable article
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Server answered with a non-success status
    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    /// Empty PMC ID
    #[error("Invalid PMC ID: {pmcid:?}")]
    InvalidPmcid { pmcid: String },

    /// HTTP client could not be built from the configuration
    #[error("Invalid client configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = result::Result<T, EuropePmcError>;

impl EuropePmcError {
    /// HTTP status code, if the error came from a server response
    pub fn status(&self) -> Option<u16> {
        match self {
            EuropePmcError::ApiError { status, .. } => Some(*status),
            EuropePmcError::RequestError(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
