use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

use crate::app::App;
use crate::audio::{AudioCmd, AudioEvent, AudioPlayer};
use crate::clipboard::ClipboardWorker;
use crate::config;
use crate::error::ClipboardError;
use crate::ui;

use super::events::AppEvent;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Handles to the worker threads the loop drives.
pub struct Workers<'a> {
    pub audio: &'a AudioPlayer,
    pub clipboard: &'a ClipboardWorker,
}

/// Main terminal event loop: draws, then sleeps until the next event or the
/// next notification deadline. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    workers: &Workers<'_>,
    events: &Receiver<AppEvent>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        let event = match app.notifications.next_deadline() {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match events.recv_timeout(wait) {
                    Ok(ev) => ev,
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match events.recv() {
                Ok(ev) => ev,
                Err(_) => break,
            },
        };

        match event {
            AppEvent::Input(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, workers, state)? {
                    break;
                }
            }
            // Resize and friends only need the redraw at the top of the loop.
            AppEvent::Input(_) => {}
            AppEvent::Audio(ev) => handle_audio_event(ev, app),
            AppEvent::Clipboard(outcome) => {
                debug!(text = %outcome.text, ok = outcome.result.is_ok(), "copy finished");
                app.on_copy_finished(&outcome.result, Instant::now());
            }
        }
    }

    Ok(())
}

fn handle_audio_event(ev: AudioEvent, app: &mut App) {
    match ev {
        AudioEvent::Started { id, .. } => debug!(id = %id, "preview audible"),
        AudioEvent::Finished { token, .. } => app.on_playback_finished(token),
        AudioEvent::Failed { token, error, .. } => {
            app.on_playback_failed(token, &error, Instant::now());
        }
    }
}

fn send_audio(audio: &AudioPlayer, cmd: Option<AudioCmd>) {
    if let Some(cmd) = cmd {
        if !audio.send(cmd) {
            warn!("audio thread is gone");
        }
    }
}

fn copy_selected_link(app: &mut App, clipboard: &ClipboardWorker) {
    let Some(link) = app.selected_link() else {
        return;
    };
    if !clipboard.copy(link) {
        let err = ClipboardError::Unavailable("clipboard worker stopped".to_string());
        app.on_copy_finished(&Err(err), Instant::now());
    }
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    workers: &Workers<'_>,
    state: &mut EventLoopState,
) -> Result<bool, Box<dyn std::error::Error>> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        workers
            .audio
            .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
        return Ok(true);
    }

    if app.search_mode {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Enter => app.exit_search_mode(),
            KeyCode::Backspace => app.pop_query_char(),
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => app.next(),
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => app.prev(),
            KeyCode::Down => app.next(),
            KeyCode::Up => app.prev(),
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.push_query_char(c);
                }
            }
            _ => {}
        }

        return Ok(false);
    }

    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => {
            workers
                .audio
                .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return Ok(true);
        }
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Tab => app.next_category(),
        KeyCode::BackTab => app.prev_category(),
        KeyCode::Char('x') => app.clear_filters(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.select_last(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter => send_audio(workers.audio, app.toggle_selected()),
        KeyCode::Char('s') => send_audio(workers.audio, app.stop()),
        KeyCode::Char('y') => copy_selected_link(app, workers.clipboard),
        KeyCode::Char('d') => {
            app.notifications.dismiss_oldest();
        }
        _ => {}
    }

    Ok(false)
}
