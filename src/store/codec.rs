//! Playlist document codec
//!
//! Decoding is deliberately permissive: playlist files can be edited by
//! hand or produced by other tools, so each field is coerced independently
//! and falls back to its default when missing or of the wrong shape. Only
//! a document that is not valid JSON at all is rejected. Unknown extra
//! fields are ignored.

use crate::error::Result;
use crate::model::{Playlist, PlaylistEntry};
use serde_json::Value;
use uuid::Uuid;

/// Parse a raw playlist document.
///
/// Fails with [`crate::Error::MalformedDocument`] only when `raw` is not
/// valid JSON; a valid-but-empty document yields a fully-defaulted playlist.
pub fn parse(raw: &str) -> Result<Playlist> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(coerce_playlist(&value))
}

/// Create a new playlist with a freshly generated unique id and all other
/// fields at their defaults
pub fn create() -> Playlist {
    Playlist {
        id: Uuid::new_v4().to_string(),
        title: String::new(),
        author: String::new(),
        description: String::new(),
        icon: String::new(),
        games: Vec::new(),
    }
}

/// Serialize a playlist to its canonical document form.
///
/// Field order follows the struct declaration, so serializing the same
/// playlist twice produces byte-identical documents.
pub fn serialize(playlist: &Playlist) -> Result<String> {
    Ok(serde_json::to_string_pretty(playlist)?)
}

/// Coerce a decoded JSON value into a playlist, field by field
fn coerce_playlist(value: &Value) -> Playlist {
    Playlist {
        id: string_field(value, "id"),
        title: string_field(value, "title"),
        author: string_field(value, "author"),
        description: string_field(value, "description"),
        icon: string_field(value, "icon"),
        games: games_field(value),
    }
}

/// Read a string field, defaulting to "" when missing or not a string
fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Read the games array; a missing or non-array value becomes an empty
/// list, and each element is coerced on its own so one odd entry cannot
/// fail the document
fn games_field(value: &Value) -> Vec<PlaylistEntry> {
    match value.get("games").and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .map(|entry| PlaylistEntry {
                id: string_field(entry, "id"),
                notes: string_field(entry, "notes"),
            })
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let mut playlist = create();
        playlist.title = "Hall of Fame".to_string();
        playlist.author = "curator".to_string();
        playlist.description = "The best of the best".to_string();
        playlist.icon = "data:image/png;base64,AAAA".to_string();
        playlist.add_game("game-b".to_string(), "second".to_string());
        playlist.add_game("game-a".to_string(), String::new());

        let document = serialize(&playlist).unwrap();
        let decoded = parse(&document).unwrap();

        assert_eq!(decoded, playlist);
    }

    #[test]
    fn test_parse_defaults_missing_fields() {
        let decoded = parse(r#"{"id": "abc"}"#).unwrap();

        assert_eq!(decoded.id, "abc");
        assert_eq!(decoded.title, "");
        assert_eq!(decoded.author, "");
        assert_eq!(decoded.description, "");
        assert_eq!(decoded.icon, "");
        assert!(decoded.games.is_empty());
    }

    #[test]
    fn test_parse_coerces_wrong_shapes_per_field() {
        let raw = r#"{
            "id": "abc",
            "title": 42,
            "author": null,
            "games": {"not": "an array"}
        }"#;
        let decoded = parse(raw).unwrap();

        assert_eq!(decoded.id, "abc");
        assert_eq!(decoded.title, "");
        assert_eq!(decoded.author, "");
        assert!(decoded.games.is_empty());
    }

    #[test]
    fn test_parse_coerces_each_game_entry_independently() {
        let raw = r#"{
            "id": "abc",
            "games": [
                {"id": "good", "notes": "fine"},
                {"id": 7},
                "not even an object"
            ]
        }"#;
        let decoded = parse(raw).unwrap();

        assert_eq!(decoded.games.len(), 3);
        assert_eq!(decoded.games[0].id, "good");
        assert_eq!(decoded.games[0].notes, "fine");
        assert_eq!(decoded.games[1].id, "");
        assert_eq!(decoded.games[2].id, "");
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let decoded = parse(r#"{"id": "abc", "someFutureField": true}"#).unwrap();
        assert_eq!(decoded.id, "abc");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = parse("{not json");
        assert!(matches!(result, Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn test_parse_empty_object_yields_defaulted_playlist() {
        let decoded = parse("{}").unwrap();
        assert_eq!(decoded.id, "");
        assert!(decoded.games.is_empty());
    }

    #[test]
    fn test_create_generates_distinct_ids() {
        let a = create();
        let b = create();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }
}
