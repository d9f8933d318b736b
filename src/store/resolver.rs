//! File identity resolution
//!
//! Playlist files can be renamed, replaced or deleted by external tools at
//! any time, so a cached path is never trusted blindly. This predicate
//! re-checks what a file on disk actually holds; both the save and the
//! delete paths use it before acting on any candidate path.

use super::codec;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of matching a file against an expected playlist id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// No file exists at the path
    NotFound,

    /// The file exists but cannot be decoded as a playlist document
    Malformed,

    /// The file could not be read for some other reason
    OtherError,

    /// The file holds a playlist with the expected id
    Matches,

    /// The file holds a playlist with a different id
    DoesNotMatch,
}

/// Check whether the file at `path` currently holds the playlist with
/// `expected_id`. Never mutates anything.
pub fn identify(path: &Path, expected_id: &str) -> Identity {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Identity::NotFound,
        Err(e) if e.kind() == ErrorKind::InvalidData => return Identity::Malformed,
        Err(e) => {
            log::warn!("Failed to read playlist file {:?}: {}", path, e);
            return Identity::OtherError;
        }
    };

    match codec::parse(&raw) {
        Ok(playlist) if playlist.id == expected_id => Identity::Matches,
        Ok(_) => Identity::DoesNotMatch,
        Err(_) => Identity::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_identify_missing_file() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("gone.json");

        assert_eq!(identify(&path, "abc"), Identity::NotFound);
    }

    #[test]
    fn test_identify_malformed_file() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(identify(&path, "abc"), Identity::Malformed);
    }

    #[test]
    fn test_identify_matching_and_differing_ids() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("playlist.json");
        fs::write(&path, r#"{"id": "abc", "title": "x"}"#).unwrap();

        assert_eq!(identify(&path, "abc"), Identity::Matches);
        assert_eq!(identify(&path, "other"), Identity::DoesNotMatch);
    }
}
