//! Commands accepted by, and events emitted from, the audio thread.

use crate::error::PlaybackError;
use crate::playback::PlayToken;

#[derive(Debug)]
pub enum AudioCmd {
    /// Stop whatever is sounding and start the clip at `url`.
    Play {
        id: String,
        url: String,
        token: PlayToken,
    },
    /// Stop playback immediately.
    Stop,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Reports carry the token of the `Play` they answer.
#[derive(Debug)]
pub enum AudioEvent {
    /// The clip is now audible.
    Started { id: String, token: PlayToken },
    /// The clip played to its end.
    Finished { id: String, token: PlayToken },
    /// The clip could not be fetched, opened or decoded.
    Failed {
        id: String,
        token: PlayToken,
        error: PlaybackError,
    },
}

/// Everything the audio thread receives: caller commands plus finished
/// background loads.
#[derive(Debug)]
pub(super) enum ThreadMsg {
    Cmd(AudioCmd),
    Loaded {
        id: String,
        url: String,
        token: PlayToken,
        result: Result<Vec<u8>, PlaybackError>,
    },
}
