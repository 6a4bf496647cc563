//! Preview playback on a dedicated audio thread.
//!
//! The UI sends `AudioCmd`s; the thread reports `AudioEvent`s back through
//! a caller-supplied callback. Starting a clip always stops the previous
//! one, so at most one preview sounds at a time.

mod player;
mod sink;
mod source;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::*;
