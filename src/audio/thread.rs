use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info, warn};

use crate::config::AudioSettings;
use crate::error::PlaybackError;
use crate::playback::PlayToken;

use super::sink::{create_sink, fade_out_sink};
use super::source::{decode, load_bytes};
use super::types::{AudioCmd, AudioEvent, ThreadMsg};

/// The load the thread is waiting for. Only the newest `Play` may start;
/// loads for anything older are dropped when they arrive.
#[derive(Debug, Default)]
pub(super) struct LoadTracker {
    wanted: Option<PlayToken>,
}

impl LoadTracker {
    pub(super) fn request(&mut self, token: PlayToken) {
        self.wanted = Some(token);
    }

    pub(super) fn cancel(&mut self) {
        self.wanted = None;
    }

    /// True if `token` is still the newest request. Consumes it.
    pub(super) fn accept(&mut self, token: PlayToken) -> bool {
        if self.wanted == Some(token) {
            self.wanted = None;
            true
        } else {
            false
        }
    }
}

/// Fetch or read the clip off the audio thread and post the bytes back.
pub(super) fn spawn_loader(
    tx: Sender<ThreadMsg>,
    id: String,
    url: String,
    token: PlayToken,
    fetch_timeout: Duration,
) {
    thread::spawn(move || {
        let result = load_bytes(&url, fetch_timeout);
        // The audio thread may have quit meanwhile.
        let _ = tx.send(ThreadMsg::Loaded {
            id,
            url,
            token,
            result,
        });
    });
}

pub(super) fn spawn_audio_thread<F>(
    tx: Sender<ThreadMsg>,
    rx: Receiver<ThreadMsg>,
    notify: F,
    audio_settings: AudioSettings,
) -> JoinHandle<()>
where
    F: Fn(AudioEvent) + Send + 'static,
{
    thread::spawn(move || {
        // A missing device is not fatal: browsing and copying still work,
        // and every play request reports the failure.
        let stream: Result<OutputStream, String> = OutputStreamBuilder::open_default_stream()
            .map(|mut s| {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                s.log_on_drop(false);
                s
            })
            .map_err(|e| e.to_string());
        if let Err(e) = &stream {
            warn!(error = %e, "no audio output device, previews disabled");
        }

        let fetch_timeout = Duration::from_millis(audio_settings.fetch_timeout_ms);
        let mut loads = LoadTracker::default();
        // The clip currently sounding, with the request that started it.
        let mut current: Option<(String, PlayToken, Sink)> = None;

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(ThreadMsg::Cmd(AudioCmd::Play { id, url, token })) => {
                    if let Some((old, _, sink)) = current.take() {
                        debug!(id = %old, "stopping previous preview");
                        sink.stop();
                    }
                    loads.request(token);
                    spawn_loader(tx.clone(), id, url, token, fetch_timeout);
                }
                Ok(ThreadMsg::Cmd(AudioCmd::Stop)) => {
                    loads.cancel();
                    if let Some((id, _, sink)) = current.take() {
                        debug!(id = %id, "preview stopped");
                        sink.stop();
                    }
                }
                Ok(ThreadMsg::Cmd(AudioCmd::Quit { fade_out_ms })) => {
                    if let Some((_, _, sink)) = current.take() {
                        // Fade out gently before stopping.
                        fade_out_sink(&sink, fade_out_ms);
                        sink.stop();
                    }
                    break;
                }
                Ok(ThreadMsg::Loaded {
                    id,
                    url,
                    token,
                    result,
                }) => {
                    if !loads.accept(token) {
                        debug!(id = %id, "dropping superseded load");
                        continue;
                    }
                    match result.and_then(|bytes| start_clip(&stream, &url, bytes, &audio_settings))
                    {
                        Ok(sink) => {
                            info!(id = %id, url = %url, "preview started");
                            current = Some((id.clone(), token, sink));
                            notify(AudioEvent::Started { id, token });
                        }
                        Err(error) => notify(AudioEvent::Failed { id, token, error }),
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    // periodic check for the clip running out
                    if current.as_ref().is_some_and(|(_, _, sink)| sink.empty()) {
                        if let Some((id, token, _)) = current.take() {
                            debug!(id = %id, "preview finished");
                            notify(AudioEvent::Finished { id, token });
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

fn start_clip(
    stream: &Result<OutputStream, String>,
    url: &str,
    bytes: Vec<u8>,
    audio_settings: &AudioSettings,
) -> Result<Sink, PlaybackError> {
    let stream = stream
        .as_ref()
        .map_err(|e| PlaybackError::NoOutputDevice(e.clone()))?;
    let source = decode(url, bytes)?;
    Ok(create_sink(stream, source, audio_settings.volume))
}
