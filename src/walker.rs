//! Recursive directory walking with cooperative cancellation
//!
//! The store scans the playlists directory in a few places (initial load,
//! save/delete fallback lookups). Scans that only need the first match can
//! stop early through the [`WalkContext`] token.

use crate::error::{Error, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Cancellation token handed to every walk callback.
///
/// Aborting is cooperative: a callback that is already running always
/// completes, and the walker checks the token before each subsequent visit.
#[derive(Debug, Default)]
pub struct WalkContext {
    aborted: bool,
}

impl WalkContext {
    /// Stop the walk before the next file is visited
    pub fn abort(&mut self) {
        self.aborted = true;
    }

    /// Whether the walk has been asked to stop
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }
}

/// Visit every regular file under `root` recursively.
///
/// `visit` receives the full path, the path relative to `root`, and the
/// shared [`WalkContext`]. An unreadable sub-directory is logged and that
/// sub-tree skipped; the walk itself only fails when `root` cannot be
/// opened at all, or when a callback returns an error.
pub fn walk<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&Path, &Path, &mut WalkContext) -> Result<()>,
{
    if !root.is_dir() {
        return Err(Error::PathUnavailable(root.to_path_buf()));
    }

    let mut ctx = WalkContext::default();

    for entry in WalkDir::new(root).follow_links(true) {
        if ctx.is_aborted() {
            break;
        }
        match entry {
            Err(e) => {
                // Skip the unreadable sub-tree, keep walking the rest
                log::warn!("Cannot access entry under {:?}: {}", root, e);
            }
            Ok(entry) if entry.file_type().is_file() => {
                let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
                visit(entry.path(), relative, &mut ctx)?;
            }
            Ok(_) => {} // directory entries - walkdir handles recursion
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").expect("failed to write test file");
    }

    #[test]
    fn test_walk_visits_nested_files() {
        let dir = TempDir::new().expect("failed to create temp dir");
        touch(&dir.path().join("a.json"));
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("b.json"));

        let mut seen: Vec<PathBuf> = Vec::new();
        walk(dir.path(), |_full, relative, _ctx| {
            seen.push(relative.to_path_buf());
            Ok(())
        })
        .unwrap();

        seen.sort();
        assert_eq!(seen, vec![PathBuf::from("a.json"), PathBuf::from("sub/b.json")]);
    }

    #[test]
    fn test_walk_abort_stops_further_visits() {
        let dir = TempDir::new().expect("failed to create temp dir");
        for name in ["a.json", "b.json", "c.json"] {
            touch(&dir.path().join(name));
        }

        let mut visits = 0;
        walk(dir.path(), |_full, _relative, ctx| {
            visits += 1;
            ctx.abort();
            Ok(())
        })
        .unwrap();

        assert_eq!(visits, 1);
    }

    #[test]
    fn test_walk_missing_root_fails() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let missing = dir.path().join("nope");

        let result = walk(&missing, |_full, _relative, _ctx| Ok(()));
        assert!(matches!(result, Err(Error::PathUnavailable(_))));
    }

    #[test]
    fn test_walk_propagates_callback_errors() {
        let dir = TempDir::new().expect("failed to create temp dir");
        touch(&dir.path().join("a.json"));

        let result = walk(dir.path(), |_full, _relative, _ctx| {
            Err(Error::AlreadyLoaded)
        });
        assert!(matches!(result, Err(Error::AlreadyLoaded)));
    }
}
