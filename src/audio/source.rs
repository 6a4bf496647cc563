//! Loading clip bytes from a resolved asset URL.
//!
//! Previews are short, so the whole clip is read into memory before
//! decoding; this keeps local and remote assets on the same code path.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use rodio::Decoder;

use crate::error::PlaybackError;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AssetLocation {
    Remote(String),
    Local(PathBuf),
}

/// Classify a resolved URL as an HTTP(S) download or a local path.
pub(crate) fn locate(url: &str) -> AssetLocation {
    if url.starts_with("http://") || url.starts_with("https://") {
        AssetLocation::Remote(url.to_string())
    } else if let Some(path) = url.strip_prefix("file://") {
        AssetLocation::Local(PathBuf::from(path))
    } else {
        AssetLocation::Local(PathBuf::from(url))
    }
}

/// Read the full clip behind `url`.
pub(crate) fn load_bytes(url: &str, fetch_timeout: Duration) -> Result<Vec<u8>, PlaybackError> {
    match locate(url) {
        AssetLocation::Remote(url) => fetch(&url, fetch_timeout),
        AssetLocation::Local(path) => {
            std::fs::read(&path).map_err(|source| PlaybackError::Open { path, source })
        }
    }
}

fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, PlaybackError> {
    let to_err = |source: reqwest::Error| PlaybackError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(to_err)?;
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(to_err)?;
    let bytes = response.bytes().map_err(to_err)?;
    Ok(bytes.to_vec())
}

/// Decode in-memory clip bytes.
pub(crate) fn decode(
    url: &str,
    bytes: Vec<u8>,
) -> Result<Decoder<Cursor<Vec<u8>>>, PlaybackError> {
    Decoder::new(Cursor::new(bytes)).map_err(|e| PlaybackError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
