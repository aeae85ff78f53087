//! Document - the in-memory mixtape collection.
//!
//! The document holds the users, playlists, and songs sequences and applies
//! changes to them. Sequence order is observable (positional id assignment,
//! order-preserving removal), so the collections are `Vec`s, not maps.

use crate::{
    change::{AddPlaylist, AddSongToPlaylist, RemovePlaylist},
    error::Result,
    ids::{IdStrategy, PositionalIds},
    Change, Error, PlaylistId, SongId, UserId,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A listener in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier within `users`
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Unmodeled fields, round-tripped unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A playlist owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique identifier within `playlists`, assigned by the engine
    pub id: PlaylistId,
    /// Owning user; should reference `users` but is not enforced here
    pub owner_id: UserId,
    /// Ordered song references, no duplicates
    pub song_ids: Vec<SongId>,
    /// Unmodeled fields, round-tripped unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A song in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique identifier within `songs`
    pub id: SongId,
    /// Performing artist
    pub artist: String,
    /// Song title
    pub title: String,
    /// Unmodeled fields, round-tripped unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The mixtape collection document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub users: Vec<User>,
    pub playlists: Vec<Playlist>,
    pub songs: Vec<Song>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }
}

impl Playlist {
    pub fn new(
        id: impl Into<PlaylistId>,
        owner_id: impl Into<UserId>,
        song_ids: Vec<SongId>,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            song_ids,
            extra: Map::new(),
        }
    }
}

impl Song {
    pub fn new(
        id: impl Into<SongId>,
        artist: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            artist: artist.into(),
            title: title.into(),
            extra: Map::new(),
        }
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up a playlist by id.
    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Look up a song by id.
    pub fn song(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Apply a batch of changes in order with the default id strategy.
    ///
    /// Stops at the first failing change. Changes applied before the
    /// failure stay applied; there is no rollback.
    pub fn apply_all<I>(&mut self, changes: I) -> Result<()>
    where
        I: IntoIterator<Item = Change>,
    {
        self.apply_all_with(changes, &mut PositionalIds)
    }

    /// Apply a batch of changes with a caller-supplied id strategy.
    pub fn apply_all_with<I, G>(&mut self, changes: I, ids: &mut G) -> Result<()>
    where
        I: IntoIterator<Item = Change>,
        G: IdStrategy + ?Sized,
    {
        for change in changes {
            self.apply_with(change, ids)?;
        }
        Ok(())
    }

    /// Apply a single change with the default id strategy.
    pub fn apply(&mut self, change: Change) -> Result<()> {
        self.apply_with(change, &mut PositionalIds)
    }

    /// Apply a single change with a caller-supplied id strategy.
    pub fn apply_with<G>(&mut self, change: Change, ids: &mut G) -> Result<()>
    where
        G: IdStrategy + ?Sized,
    {
        match change {
            Change::AddPlaylist(op) => self.apply_add_playlist(op, ids),
            Change::RemovePlaylist(op) => self.apply_remove_playlist(op),
            Change::AddSongToPlaylist(op) => self.apply_add_song(op),
            // Unrecognized change types are skipped, not rejected.
            Change::Unknown => Ok(()),
        }
    }

    fn apply_add_playlist<G>(&mut self, op: AddPlaylist, ids: &mut G) -> Result<()>
    where
        G: IdStrategy + ?Sized,
    {
        let id = ids.next_playlist_id(self);
        self.playlists.push(Playlist {
            id,
            owner_id: op.user_id,
            song_ids: op.song_ids,
            extra: op.extra,
        });
        Ok(())
    }

    fn apply_remove_playlist(&mut self, op: RemovePlaylist) -> Result<()> {
        if self.playlist(&op.playlist_id).is_none() {
            return Err(Error::PlaylistNotFound(op.playlist_id));
        }
        // Ids are unique, so this removes at most one playlist.
        self.playlists.retain(|p| p.id != op.playlist_id);
        Ok(())
    }

    fn apply_add_song(&mut self, op: AddSongToPlaylist) -> Result<()> {
        // Check order is contractual: playlist existence before song
        // existence before duplicate.
        let song_exists = self.songs.iter().any(|s| s.id == op.song_id);
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.id == op.playlist_id)
            .ok_or_else(|| Error::PlaylistNotFound(op.playlist_id.clone()))?;
        if !song_exists {
            return Err(Error::SongNotFound(op.song_id));
        }
        if playlist.song_ids.contains(&op.song_id) {
            return Err(Error::DuplicateSong(op.song_id));
        }
        playlist.song_ids.push(op.song_id);
        Ok(())
    }
}
