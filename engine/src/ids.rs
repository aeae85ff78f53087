//! Playlist id assignment strategies.
//!
//! Id assignment is the one piece of apply logic with a questionable
//! inherited behavior, so it sits behind a seam: validation never needs to
//! change when the scheme does.

use crate::{Document, PlaylistId};

/// Produces the id for the next playlist added to a document.
///
/// Called once per add-playlist change, before the playlist is pushed.
pub trait IdStrategy {
    fn next_playlist_id(&mut self, document: &Document) -> PlaylistId;
}

/// The historical scheme: string form of (playlist count + 1).
///
/// This is positional, not max-plus-one. If playlists were removed earlier
/// in the batch, the next id can collide with an existing one. Kept
/// bit-for-bit for compatibility; use [`SequentialIds`] when fresh ids
/// matter more than fidelity.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalIds;

impl IdStrategy for PositionalIds {
    fn next_playlist_id(&mut self, document: &Document) -> PlaylistId {
        (document.playlists.len() + 1).to_string()
    }
}

/// A monotonic counter that never reissues an id, removals or not.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Start counting from 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start counting from an explicit value.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Start above the highest numeric playlist id already in the document.
    /// Non-numeric ids are ignored.
    pub fn seeded_from(document: &Document) -> Self {
        let max = document
            .playlists
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdStrategy for SequentialIds {
    fn next_playlist_id(&mut self, _document: &Document) -> PlaylistId {
        let id = self.next.to_string();
        self.next += 1;
        id
    }
}
