//! Data model for game playlists
//!
//! This module defines the playlist structures independently of how
//! they are stored on disk; the document codec lives in the store layer.

mod playlist;

pub use playlist::{Playlist, PlaylistEntry};
