use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use playlist_store::preferences;
use playlist_store::{PlaylistStore, StoreConfig};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "playlist-store")]
#[command(about = "Manage game playlists stored as JSON documents", long_about = None)]
struct Args {
    /// Path to the launcher preferences file
    #[arg(short = 'c', long, default_value = "./preferences.json")]
    config: String,

    /// Launcher data root (overrides the preferences file)
    #[arg(short = 'r', long)]
    root: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all playlists
    List,

    /// Show one playlist with all its entries
    Show {
        /// Playlist id
        id: String,
    },

    /// Create a new playlist and save it
    Create {
        /// Title for the new playlist
        #[arg(long, default_value = "")]
        title: String,

        /// Author of the new playlist
        #[arg(long, default_value = "")]
        author: String,

        /// Description of the new playlist
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a playlist, both its file and the in-memory entry
    Delete {
        /// Playlist id
        id: String,
    },

    /// Edit playlist metadata and save it
    Edit {
        /// Playlist id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Add a game reference to a playlist and save it
    AddGame {
        /// Playlist id
        playlist_id: String,

        /// Game id (not validated against the game catalog)
        game_id: String,

        /// Free-text notes stored with the entry
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Remove a game reference from a playlist and save it
    RemoveGame {
        /// Playlist id
        playlist_id: String,

        /// Game id
        game_id: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Resolve the storage root: an explicit --root wins over the
    // preferences file
    let root = match &args.root {
        Some(root) => PathBuf::from(shellexpand::tilde(root).as_ref()),
        None => {
            let preferences = preferences::read_or_create(Path::new(&args.config))
                .with_context(|| format!("Failed to read preferences: {:?}", args.config))?;
            preferences.root_path
        }
    };

    let mut store = PlaylistStore::new(StoreConfig::new(root));
    store.load().context("Failed to load playlists")?;

    match args.command {
        Command::List => {
            if store.playlists().is_empty() {
                println!("No playlists found");
            }
            for playlist in store.playlists() {
                println!("{}  {}  ({} games)", playlist.id, playlist.title, playlist.len());
            }
        }

        Command::Show { id } => {
            let playlist = store
                .find(&id)
                .with_context(|| format!("No playlist with id {}", id))?;

            println!("id:          {}", playlist.id);
            println!("title:       {}", playlist.title);
            println!("author:      {}", playlist.author);
            println!("description: {}", playlist.description);
            println!("games:       {}", playlist.len());
            for entry in &playlist.games {
                if entry.notes.is_empty() {
                    println!("  - {}", entry.id);
                } else {
                    println!("  - {} ({})", entry.id, entry.notes);
                }
            }
        }

        Command::Create {
            title,
            author,
            description,
        } => {
            let mut playlist = store.create();
            playlist.title = title;
            playlist.author = author;
            playlist.description = description;
            store.save(&playlist).context("Failed to save playlist")?;

            // Keep the in-memory copy in sync with what was written
            if let Some(stored) = store.playlist_mut(&playlist.id) {
                *stored = playlist.clone();
            }
            println!("Created playlist {}", playlist.id);
        }

        Command::Delete { id } => {
            let deleted = store
                .delete(&id)
                .with_context(|| format!("Failed to delete playlist {}", id))?;
            store.remove(&id);
            if deleted {
                println!("Deleted playlist {}", id);
            } else {
                println!("No playlist file found for {}", id);
            }
        }

        Command::Edit {
            id,
            title,
            author,
            description,
        } => {
            let playlist = {
                let playlist = store
                    .playlist_mut(&id)
                    .with_context(|| format!("No playlist with id {}", id))?;
                if let Some(title) = title {
                    playlist.title = title;
                }
                if let Some(author) = author {
                    playlist.author = author;
                }
                if let Some(description) = description {
                    playlist.description = description;
                }
                playlist.clone()
            };
            store.save(&playlist).context("Failed to save playlist")?;
            println!("Saved playlist {}", id);
        }

        Command::AddGame {
            playlist_id,
            game_id,
            notes,
        } => {
            let playlist = {
                let playlist = store
                    .playlist_mut(&playlist_id)
                    .with_context(|| format!("No playlist with id {}", playlist_id))?;
                if playlist.contains_game(&game_id) {
                    bail!("Playlist {} already contains game {}", playlist_id, game_id);
                }
                playlist.add_game(game_id.clone(), notes);
                playlist.clone()
            };
            store.save(&playlist).context("Failed to save playlist")?;
            println!("Added game {} to playlist {}", game_id, playlist_id);
        }

        Command::RemoveGame {
            playlist_id,
            game_id,
        } => {
            let playlist = {
                let playlist = store
                    .playlist_mut(&playlist_id)
                    .with_context(|| format!("No playlist with id {}", playlist_id))?;
                if !playlist.remove_game(&game_id) {
                    bail!("Playlist {} does not contain game {}", playlist_id, game_id);
                }
                playlist.clone()
            };
            store.save(&playlist).context("Failed to save playlist")?;
            println!("Removed game {} from playlist {}", game_id, playlist_id);
        }
    }

    Ok(())
}
