//! Error types shared across the catalog, playback and clipboard layers.
//!
//! None of these are fatal: the runtime turns them into notifications or
//! falls back to defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a sound catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Two records share the same id.
    #[error("duplicate sound id {0:?}")]
    DuplicateId(String),
    /// The record at the given position has a blank id.
    #[error("sound #{0} has an empty id")]
    EmptyId(usize),
}

/// Errors raised by the audio worker when a preview cannot start.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Errors raised when writing to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (e.g. no display server).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard refused the write.
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),
}
