use std::sync::Mutex;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent, ThreadMsg};

pub struct AudioPlayer {
    tx: Sender<ThreadMsg>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the audio thread. `notify` is called from that thread for
    /// every start, natural end or failure.
    pub fn new<F>(audio_settings: AudioSettings, notify: F) -> Self
    where
        F: Fn(AudioEvent) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<ThreadMsg>();
        let audio_handle = spawn_audio_thread(tx.clone(), rx, notify, audio_settings);

        Self {
            tx,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    /// Queue `cmd` for the audio thread. Returns false if the thread is gone.
    pub fn send(&self, cmd: AudioCmd) -> bool {
        self.tx.send(ThreadMsg::Cmd(cmd)).is_ok()
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
