//! # Mixtape Engine
//!
//! The change-application engine for a mixtape collection.
//!
//! A [`Document`] holds three ordered sequences - users, playlists, and
//! songs. Callers mutate it by applying a batch of [`Change`] records in
//! order; each change observes the cumulative effect of all prior changes
//! in the same batch.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never touches files or the network; callers hand
//!   it a parsed document and take the result away
//! - **Deterministic**: the same document and batch always produce the same
//!   output
//! - **Fail fast**: the first invalid change aborts the batch; changes
//!   already applied stay applied, there is no rollback
//!
//! ## Changes
//!
//! Mutations are expressed as change records, not direct edits:
//! - [`AddPlaylist`] - create a playlist for a user (the engine assigns the
//!   id)
//! - [`RemovePlaylist`] - remove a playlist by id
//! - [`AddSongToPlaylist`] - append an existing song to a playlist
//!
//! A change whose `type` tag is not recognized deserializes to
//! [`Change::Unknown`] and is skipped without error.
//!
//! ## Quick Start
//!
//! ```rust
//! use mixtape_engine::{AddPlaylist, Change, Document, Song, User};
//!
//! let mut document = Document::new();
//! document.users.push(User::new("1", "Albin Jaye"));
//! document.songs.push(Song::new("1", "Camila Cabello", "Never Be the Same"));
//!
//! let batch = vec![Change::AddPlaylist(AddPlaylist::new("1", vec!["1".into()]))];
//! document.apply_all(batch).unwrap();
//!
//! let playlist = document.playlist("1").unwrap();
//! assert_eq!(playlist.owner_id, "1");
//! assert_eq!(playlist.song_ids, vec!["1"]);
//! ```
//!
//! ## Id Assignment
//!
//! Playlist ids come from an [`IdStrategy`]. The default, [`PositionalIds`],
//! reproduces the historical "playlist count + 1" scheme, including its
//! known flaw: after a removal earlier in the batch the next id can collide
//! with an existing one. [`SequentialIds`] is a monotonic alternative for
//! callers that want fresh ids; swap it in via
//! [`Document::apply_all_with`].

pub mod change;
pub mod document;
pub mod error;
pub mod ids;

// Re-export main types at crate root
pub use change::{AddPlaylist, AddSongToPlaylist, Change, RemovePlaylist};
pub use document::{Document, Playlist, Song, User};
pub use error::Error;
pub use ids::{IdStrategy, PositionalIds, SequentialIds};

/// Type aliases for clarity
pub type UserId = String;
pub type PlaylistId = String;
pub type SongId = String;
