use serde::{Deserialize, Serialize};

/// A named, ordered collection of game references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique identifier, generated when the playlist is created.
    /// The filename a playlist is stored under is only a hint; this id
    /// is what actually identifies the document.
    pub id: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Author name
    #[serde(default)]
    pub author: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Embedded image reference (data URL), empty when the playlist has no icon
    #[serde(default)]
    pub icon: String,

    /// Game entries (ordered)
    #[serde(default)]
    pub games: Vec<PlaylistEntry>,
}

/// Entry in a playlist, referencing a game by ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Game identifier (not validated against the game catalog at this layer)
    pub id: String,

    /// Free-text notes about the entry
    #[serde(default)]
    pub notes: String,
}

impl Playlist {
    /// Add a game to the end of this playlist
    pub fn add_game(&mut self, game_id: String, notes: String) {
        self.games.push(PlaylistEntry { id: game_id, notes });
    }

    /// Remove a game from this playlist, returning whether it was present
    pub fn remove_game(&mut self, game_id: &str) -> bool {
        let before = self.games.len();
        self.games.retain(|entry| entry.id != game_id);
        self.games.len() != before
    }

    /// Check if this playlist references a given game
    pub fn contains_game(&self, game_id: &str) -> bool {
        self.games.iter().any(|entry| entry.id == game_id)
    }

    /// Number of games in this playlist
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist_with_games(ids: &[&str]) -> Playlist {
        let mut playlist = Playlist {
            id: "test-playlist".to_string(),
            title: "Test".to_string(),
            author: String::new(),
            description: String::new(),
            icon: String::new(),
            games: Vec::new(),
        };
        for id in ids {
            playlist.add_game(id.to_string(), String::new());
        }
        playlist
    }

    #[test]
    fn test_add_game_preserves_order() {
        let playlist = playlist_with_games(&["a", "b", "c"]);

        assert_eq!(playlist.len(), 3);
        let ids: Vec<&str> = playlist.games.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_game() {
        let mut playlist = playlist_with_games(&["a", "b"]);

        assert!(playlist.remove_game("a"));
        assert!(!playlist.remove_game("a"));
        assert_eq!(playlist.len(), 1);
        assert!(playlist.contains_game("b"));
    }
}
