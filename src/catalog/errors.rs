//! Custom error types for signature carving

use std::fmt;
use std::io;

/// Carving-specific error types
#[derive(Debug)]
pub enum CarveError {
    /// I/O error
    IoError(io::Error),
    /// Malformed definitions line, carried verbatim
    FormatError(String),
    /// Invalid hex signature or undecodable image payload
    DecodeError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarveError::IoError(e) => write!(f, "I/O error: {}", e),
            CarveError::FormatError(line) => write!(f, "Invalid format in file signatures: {}", line),
            CarveError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            CarveError::GenericError(msg) => write!(f, "Carving error: {}", msg),
        }
    }
}

impl std::error::Error for CarveError {}

impl From<io::Error> for CarveError {
    fn from(error: io::Error) -> Self {
        CarveError::IoError(error)
    }
}

impl From<image::ImageError> for CarveError {
    fn from(error: image::ImageError) -> Self {
        match error {
            image::ImageError::IoError(e) => CarveError::IoError(e),
            other => CarveError::DecodeError(other.to_string()),
        }
    }
}

impl From<String> for CarveError {
    fn from(msg: String) -> Self {
        CarveError::GenericError(msg)
    }
}

/// Result type for carving operations
pub type CarveResult<T> = Result<T, CarveError>;
