use std::io;
use thiserror::Error;

/// Error type for repfam-io operations.
#[derive(Error, Debug)]
pub enum AnnotationError {
    /// IO error occurred while writing annotations or graphs.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for repfam-io operations.
pub type Result<T> = std::result::Result<T, AnnotationError>;
