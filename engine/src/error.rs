//! Error types for the Mixtape engine.
//!
//! Display strings are part of the contract: callers match on them, so each
//! variant keeps its historical message verbatim. The payload carries the
//! offending id for diagnostics without changing the message.

use crate::{PlaylistId, SongId};
use thiserror::Error;

/// All possible errors from applying a change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The referenced playlist is not in the document.
    #[error("playlist does not exist")]
    PlaylistNotFound(PlaylistId),

    /// The referenced song is not in the document.
    #[error("song does not exist")]
    SongNotFound(SongId),

    /// The song is already on the target playlist.
    #[error("song already added to playlist")]
    DuplicateSong(SongId),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::PlaylistNotFound("9".into());
        assert_eq!(err.to_string(), "playlist does not exist");

        let err = Error::SongNotFound("9".into());
        assert_eq!(err.to_string(), "song does not exist");

        let err = Error::DuplicateSong("1".into());
        assert_eq!(err.to_string(), "song already added to playlist");
    }
}
