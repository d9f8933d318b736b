//! Error types for the playlist store

use std::path::PathBuf;

/// Errors produced by store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured storage root does not exist or is not a directory
    #[error("storage root is not available: {0:?}")]
    RootUnavailable(PathBuf),

    /// The playlist directory's name is already in use by a regular file.
    /// Requires the user to delete or rename that file.
    #[error("the playlist directory's name is already in use by a file (path: {0:?})")]
    NameCollision(PathBuf),

    /// `load()` was called more than once on the same store instance
    #[error("the playlists have already been loaded")]
    AlreadyLoaded,

    /// A walk root could not be opened
    #[error("path is not available for walking: {0:?}")]
    PathUnavailable(PathBuf),

    /// A playlist document could not be decoded as JSON
    #[error("malformed playlist document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Specialized Result type for playlist store operations
pub type Result<T> = std::result::Result<T, Error>;
