//! Store configuration

use std::path::PathBuf;

/// Canonical file extension for playlist documents
pub const PLAYLIST_EXTENSION: &str = "json";

/// Configuration for the playlist store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Launcher data root (supplied by the preferences collaborator)
    pub root_path: PathBuf,

    /// Name of the playlists directory under the root
    pub playlists_dir: String,
}

impl StoreConfig {
    /// Create a configuration rooted at the given launcher data path
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            playlists_dir: "playlists".to_string(),
        }
    }

    /// Use a different playlists directory name
    pub fn with_playlists_dir(mut self, name: impl Into<String>) -> Self {
        self.playlists_dir = name.into();
        self
    }

    /// Full path of the playlists directory
    pub fn playlists_path(&self) -> PathBuf {
        self.root_path.join(&self.playlists_dir)
    }

    /// Path used when a brand-new file must be created for a playlist.
    /// Existing files may have arbitrary names; this convention only
    /// applies to files the store creates itself.
    pub fn new_file_path(&self, id: &str) -> PathBuf {
        self.playlists_path()
            .join(format!("{}.{}", id, PLAYLIST_EXTENSION))
    }
}
