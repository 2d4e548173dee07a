//! Error types for brokkr-core

use thiserror::Error;

/// Result type alias using brokkr-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for brokkr
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed composite resource id
    #[error("unexpected resource id format: {id}, expected attribute1:attribute2")]
    InvalidResourceId { id: String },

    /// Size string that does not reduce to an integer
    #[error("invalid size value: {input}")]
    InvalidSize {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl Error {
    /// Create an invalid resource id error
    pub fn invalid_resource_id(id: impl Into<String>) -> Self {
        Self::InvalidResourceId { id: id.into() }
    }

    /// Create an invalid size error
    pub fn invalid_size(input: impl Into<String>, source: std::num::ParseIntError) -> Self {
        Self::InvalidSize {
            input: input.into(),
            source,
        }
    }
}
