//! Playlist Store - embedded document store for game playlists
//!
//! Playlists are named, ordered lists of game references, stored as one
//! JSON document per file in a shared directory. The store keeps an
//! in-memory working set loosely synchronized with disk and tolerates
//! external edits, renames and malformed files.

pub mod error;
pub mod model;
pub mod preferences;
pub mod store;
pub mod walker;

pub use error::{Error, Result};
pub use store::{PlaylistStore, StoreConfig};
