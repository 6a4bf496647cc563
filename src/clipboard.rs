//! Copy-to-clipboard on a worker thread.
//!
//! Writes are fire-and-forget from the UI's point of view: the worker
//! reports each outcome through a callback and never retries.

use std::sync::mpsc::{self, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::error::ClipboardError;

/// The platform clipboard boundary.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via `arboard`, opened on first use.
///
/// The handle stays alive for the whole session; on X11 the copied text is
/// only served while it exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(cb);
        }
        match self.inner.as_mut() {
            Some(cb) => cb
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::Rejected(e.to_string())),
            None => Err(ClipboardError::Unavailable("clipboard not open".to_string())),
        }
    }
}

/// Result of one copy request.
#[derive(Debug)]
pub struct CopyOutcome {
    pub text: String,
    pub result: Result<(), ClipboardError>,
}

pub struct ClipboardWorker {
    tx: Sender<String>,
}

impl ClipboardWorker {
    /// Spawn the worker. The backend is built on the worker thread, since
    /// platform clipboard handles are not always `Send`.
    pub fn spawn<B, M, F>(make_backend: M, notify: F) -> Self
    where
        B: ClipboardBackend + 'static,
        M: FnOnce() -> B + Send + 'static,
        F: Fn(CopyOutcome) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<String>();
        thread::spawn(move || {
            let mut backend = make_backend();
            while let Ok(text) = rx.recv() {
                let result = backend.set_text(&text);
                match &result {
                    Ok(()) => debug!(text = %text, "copied to clipboard"),
                    Err(e) => warn!(error = %e, "clipboard write failed"),
                }
                notify(CopyOutcome { text, result });
            }
        });
        Self { tx }
    }

    /// Queue `text` for the clipboard. Returns false if the worker is gone.
    pub fn copy(&self, text: impl Into<String>) -> bool {
        self.tx.send(text.into()).is_ok()
    }
}
