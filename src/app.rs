//! Application module: exposes the session model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and owns the filter state, the
//! playback coordinator and the notification queue for one session.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
