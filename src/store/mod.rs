//! Playlist store - creating, loading, saving and deleting playlist documents
//!
//! Playlists are stored as one JSON document per file under a playlists
//! directory. The directory is shared with external tools and the user, so
//! the store treats its id-to-path cache as a hint and re-verifies file
//! identity before every write or unlink.

pub mod codec;
pub mod config;
pub mod resolver;

pub use config::StoreConfig;

use crate::error::{Error, Result};
use crate::model::Playlist;
use crate::walker;
use resolver::Identity;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Lifecycle of a store instance; `load()` is valid exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreState {
    Uninitialized,
    Loading,
    Ready,
}

/// In charge of creating, loading, saving and storing the game playlists
pub struct PlaylistStore {
    config: StoreConfig,

    /// All playlists, the working set for the running session
    playlists: Vec<Playlist>,

    /// Map of playlist ids to the file they were last read from or written
    /// to. A performance hint only: external edits can invalidate any entry
    /// at any time, so entries are re-verified before use.
    file_index: HashMap<String, PathBuf>,

    state: StoreState,
}

impl PlaylistStore {
    /// Create an unloaded store for the given configuration
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            playlists: Vec::new(),
            file_index: HashMap::new(),
            state: StoreState::Uninitialized,
        }
    }

    /// All playlists currently held in memory
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Find a playlist by id
    pub fn find(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Mutable access to a playlist for in-memory edits; changes are not
    /// persisted until [`save`](Self::save) is called
    pub fn playlist_mut(&mut self, id: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.id == id)
    }

    /// Load all playlists from the playlists directory.
    ///
    /// Valid once per store instance; a second call fails with
    /// [`Error::AlreadyLoaded`]. A missing playlists directory is created;
    /// one whose name is taken by a regular file is a fatal
    /// [`Error::NameCollision`] the user has to resolve.
    pub fn load(&mut self) -> Result<()> {
        if self.state != StoreState::Uninitialized {
            return Err(Error::AlreadyLoaded);
        }
        self.state = StoreState::Loading;

        // The storage root comes from the preferences collaborator and must
        // already exist; the store never creates it.
        if !self.config.root_path.is_dir() {
            return Err(Error::RootUnavailable(self.config.root_path.clone()));
        }

        let dir = self.config.playlists_path();
        match fs::metadata(&dir) {
            Ok(meta) if meta.is_file() => return Err(Error::NameCollision(dir)),
            Ok(_) => {}
            Err(_) => fs::create_dir_all(&dir)?,
        }

        // Decode every file in the directory. A single bad file is skipped,
        // never fatal; the rest of the collection still loads.
        let mut loaded: Vec<(Playlist, PathBuf)> = Vec::new();
        walker::walk(&dir, |full_path, _relative, _ctx| {
            match fs::read_to_string(full_path) {
                Ok(raw) => match codec::parse(&raw) {
                    Ok(playlist) => loaded.push((playlist, full_path.to_path_buf())),
                    Err(e) => {
                        log::warn!("Skipping malformed playlist file {:?}: {}", full_path, e)
                    }
                },
                Err(e) => log::warn!("Skipping unreadable playlist file {:?}: {}", full_path, e),
            }
            Ok(())
        })?;

        for (playlist, path) in loaded {
            // Two files carrying the same id: keep the first, ids stay unique
            if self.file_index.contains_key(&playlist.id) {
                log::warn!(
                    "Duplicate playlist id {} in {:?}, keeping the copy loaded first",
                    playlist.id,
                    path
                );
                continue;
            }
            self.file_index.insert(playlist.id.clone(), path);
            self.playlists.push(playlist);
        }

        self.state = StoreState::Ready;
        log::info!("Loaded {} playlists from {:?}", self.playlists.len(), dir);
        Ok(())
    }

    /// Save a playlist document to disk.
    ///
    /// Resolution is layered: the cached path is tried first, then a full
    /// directory scan for a file holding this id, and finally a brand-new
    /// file named after the id. The write is a full-content overwrite, so
    /// saving the same playlist twice is idempotent.
    pub fn save(&mut self, playlist: &Playlist) -> Result<()> {
        // Check if the file the playlist was loaded from still exists and
        // still holds the same id. This only saves the cost of recursing
        // through the whole directory in the common case.
        if let Some(path) = self.file_index.get(&playlist.id).cloned() {
            match resolver::identify(&path, &playlist.id) {
                // A vanished file means the path is free to (re)create
                Identity::Matches | Identity::NotFound => {
                    return self.write_playlist(&path, playlist);
                }
                _ => {} // stale hint, fall through to the full scan
            }
        }

        // Check all other files in the playlists directory and sub-folders.
        // This finds the file even after an external rename, since the id
        // inside the document is what counts.
        let scan_root = self.config.playlists_path();
        let mut found: Option<PathBuf> = None;
        walker::walk(&scan_root, |full_path, _relative, ctx| {
            if resolver::identify(full_path, &playlist.id) == Identity::Matches {
                found = Some(full_path.to_path_buf());
                ctx.abort();
            }
            Ok(())
        })?;
        if let Some(path) = found {
            return self.write_playlist(&path, playlist);
        }

        // No file anywhere holds this id: create a new one
        let path = self.config.new_file_path(&playlist.id);
        self.write_playlist(&path, playlist)
    }

    /// Delete the file of a playlist (does NOT remove it from this store).
    ///
    /// Returns whether a file holding the id was found and deleted; not
    /// finding one is a normal negative result, not an error.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        // Cheap route first, same as save - but only an exact identity
        // match may be unlinked
        if let Some(path) = self.file_index.get(id).cloned() {
            if resolver::identify(&path, id) == Identity::Matches {
                fs::remove_file(&path)?;
                log::debug!("Deleted playlist {} at {:?}", id, path);
                return Ok(true);
            }
        }

        let scan_root = self.config.playlists_path();
        let mut found: Option<PathBuf> = None;
        walker::walk(&scan_root, |full_path, _relative, ctx| {
            if resolver::identify(full_path, id) == Identity::Matches {
                found = Some(full_path.to_path_buf());
                ctx.abort();
            }
            Ok(())
        })?;

        match found {
            Some(path) => {
                fs::remove_file(&path)?;
                log::debug!("Deleted playlist {} at {:?}", id, path);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a playlist from this store (does NOT delete its file).
    ///
    /// Returns whether a playlist with the id was present. Callers wanting
    /// to fully delete a playlist call both this and [`delete`](Self::delete).
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.playlists.len();
        self.playlists.retain(|p| p.id != id);
        let removed = self.playlists.len() != before;
        if removed {
            self.file_index.remove(id);
        }
        removed
    }

    /// Create a new playlist, add it to this store and return it.
    ///
    /// The playlist exists only in memory until it is saved.
    pub fn create(&mut self) -> Playlist {
        let playlist = codec::create();
        self.playlists.push(playlist.clone());
        playlist
    }

    /// Write the serialized document and remember where it went
    fn write_playlist(&mut self, path: &Path, playlist: &Playlist) -> Result<()> {
        let document = codec::serialize(playlist)?;
        fs::write(path, document)?;
        self.file_index
            .insert(playlist.id.clone(), path.to_path_buf());
        log::debug!("Saved playlist {} to {:?}", playlist.id, path);
        Ok(())
    }
}
