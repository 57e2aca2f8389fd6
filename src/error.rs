//! Error types shared by the library layers

use thiserror::Error;

/// The library source returned no tracks at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No songs found in music library")]
pub struct EmptyLibraryError;

/// Encoding a snapshot into an export document failed
#[derive(Debug, Error)]
#[error("Failed to convert data for export: {0}")]
pub struct SerializationError(String);

impl SerializationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(e: serde_json::Error) -> Self {
        Self(e.to_string())
    }
}

impl From<std::fmt::Error> for SerializationError {
    fn from(e: std::fmt::Error) -> Self {
        Self(e.to_string())
    }
}

/// Failures reported by a library source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Not authorized to access music library")]
    Unauthorized,

    #[error("Music library has no data to read")]
    NoData,

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

/// Failures reported by an export sink
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("Could not access export directory: {0}")]
    StorageUnavailable(String),

    #[error("Failed to create export file: {0}")]
    WriteFailed(String),
}

/// Anything that can stop a query-and-export run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    EmptyLibrary(#[from] EmptyLibraryError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}
