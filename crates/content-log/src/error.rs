//! Error types for content log access.

use std::path::PathBuf;

/// Errors produced while reading the content log.
#[derive(Debug, thiserror::Error)]
pub enum ContentLogError {
    #[error("content log not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
