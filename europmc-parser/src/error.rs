use std::result;

use thiserror::Error;

/// Error types for loading Europe PMC article XML
#[derive(Error, Debug)]
pub enum ParseError {
    /// XML parsing failed, including failures reading the underlying stream
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// The file to load does not exist
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },
}

pub type Result<T> = result::Result<T, ParseError>;

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        ParseError::XmlError(err.to_string())
    }
}
