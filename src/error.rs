//! Error types for the soundboard core
//!
//! None of these are fatal: every `Soundboard` operation converts them into
//! a status message and a safe state before returning.

use thiserror::Error;

/// Failure to obtain the clip list from a catalog source
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Source answered with a non-success status code
    #[error("HTTP {0}")]
    Http(u16),

    /// Network-level failure (DNS, connection, TLS)
    #[error("{0}")]
    Transport(String),

    /// Local manifest could not be read
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Payload was not a valid clip listing
    #[error("malformed catalog: {0}")]
    Malformed(String),

    /// Authenticated source queried without a session
    #[error("not signed in")]
    NotSignedIn,
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err.to_string())
    }
}

/// A clip could not be started or failed while playing
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Resource could not be acquired for the URL
    #[error("could not open {url}: {reason}")]
    Open { url: String, reason: String },

    /// Resource was acquired but refused to start
    #[error("could not start playback: {0}")]
    Start(String),

    /// Resource reported an error mid-play
    #[error("{0}")]
    Resource(String),
}

/// Order store write failure (always swallowed by the reorder engine)
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("order store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize order: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Storage refused the write (quota, privacy mode)
    #[error("order store unavailable: {0}")]
    Unavailable(String),
}

/// Failure reported by a write-capable clip backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("clip not found: {0}")]
    NotFound(String),

    #[error("unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("backend rejected request: {0}")]
    Rejected(String),
}

/// Umbrella error recorded by the soundboard after each operation
#[derive(Debug, Error)]
pub enum SoundboardError {
    #[error("could not load clips: {0}")]
    CatalogLoad(#[from] CatalogError),

    #[error("could not play {title}: {source}")]
    Playback {
        title: String,
        #[source]
        source: PlaybackError,
    },

    /// Write attempted without a signed-in user; nothing was sent
    #[error("sign in required to {0}")]
    WriteRefused(String),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("unknown clip: {0}")]
    UnknownClip(String),
}
