//! Launcher preferences file
//!
//! Small collaborator that tells the store where its data lives. The file
//! is JSON with read-or-create semantics: if it is missing or cannot be
//! parsed, defaults are written back and used.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User preferences relevant to playlist storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Launcher data root; the playlists directory lives underneath it
    pub root_path: PathBuf,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
        }
    }
}

/// Read the preferences file, or create one with defaults if it is missing
/// or unreadable
pub fn read_or_create(path: &Path) -> Result<Preferences> {
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(preferences) => Ok(preferences),
            Err(e) => {
                log::warn!(
                    "Failed to parse preferences file {:?} ({}), rewriting defaults",
                    path,
                    e
                );
                let preferences = Preferences::default();
                save(path, &preferences)?;
                Ok(preferences)
            }
        },
        Err(_) => {
            let preferences = Preferences::default();
            save(path, &preferences)?;
            Ok(preferences)
        }
    }
}

/// Write the preferences file
pub fn save(path: &Path, preferences: &Preferences) -> Result<()> {
    let json = serde_json::to_string_pretty(preferences)?;
    fs::write(path, json)?;
    Ok(())
}
