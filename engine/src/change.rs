//! Change records for expressing document mutations.
//!
//! Mutations are expressed as changes, not direct edits. A batch of changes
//! is parsed once, applied in order, and discarded; nothing here is
//! persisted.

use crate::{PlaylistId, SongId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Create a new playlist for a user.
///
/// The playlist id is assigned by the engine, never supplied here. Any
/// fields beyond `user_id` and `song_ids` are carried onto the stored
/// playlist verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPlaylist {
    /// Owner of the new playlist (not validated against `users`)
    pub user_id: UserId,
    /// Initial song ids, stored as-is
    pub song_ids: Vec<SongId>,
    /// Unmodeled fields, carried through to the playlist
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Remove a playlist by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovePlaylist {
    /// Id of the playlist to remove
    pub playlist_id: PlaylistId,
}

/// Append an existing song to an existing playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSongToPlaylist {
    /// Target playlist
    pub playlist_id: PlaylistId,
    /// Song to append
    pub song_id: SongId,
}

/// A change that can be applied to a document.
///
/// The wire form is a JSON object tagged by a snake_case `type` field, e.g.
/// `{"type": "add_playlist", "user_id": "1", "song_ids": ["1"]}`.
/// Unrecognized tags deserialize to [`Change::Unknown`], which applies as a
/// no-op; that leniency is deliberate, inherited behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Change {
    AddPlaylist(AddPlaylist),
    RemovePlaylist(RemovePlaylist),
    AddSongToPlaylist(AddSongToPlaylist),
    #[serde(other)]
    Unknown,
}

impl AddPlaylist {
    /// Create a new add-playlist change with no extra fields.
    pub fn new(user_id: impl Into<UserId>, song_ids: Vec<SongId>) -> Self {
        Self {
            user_id: user_id.into(),
            song_ids,
            extra: Map::new(),
        }
    }
}

impl RemovePlaylist {
    pub fn new(playlist_id: impl Into<PlaylistId>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
        }
    }
}

impl AddSongToPlaylist {
    pub fn new(playlist_id: impl Into<PlaylistId>, song_id: impl Into<SongId>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            song_id: song_id.into(),
        }
    }
}
