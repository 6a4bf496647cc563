//! Everything the event loop wakes up for, funnelled into one channel.

use std::sync::mpsc::Sender;
use std::thread;

use crossterm::event::{self, Event};
use tracing::warn;

use crate::audio::AudioEvent;
use crate::clipboard::CopyOutcome;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input (keys, resize).
    Input(Event),
    /// Report from the audio thread.
    Audio(AudioEvent),
    /// Report from the clipboard worker.
    Clipboard(CopyOutcome),
}

/// Forward terminal input into `tx` until the receiver goes away.
pub fn spawn_input_thread(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(AppEvent::Input(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "terminal input failed");
                    break;
                }
            }
        }
    });
}
