use std::env;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::catalog::AssetResolver;
use crate::clipboard::{ClipboardWorker, SystemClipboard};
use crate::logging;
use crate::notify::NotificationQueue;

mod event_loop;
mod events;
mod settings;
mod startup;

use events::AppEvent;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    match logging::init(&settings.logging) {
        Ok(path) => info!(path = %path.display(), "sonicvault starting"),
        Err(e) => eprintln!("sonicvault: logging disabled: {e}"),
    }

    let catalog_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.catalog.path.clone());
    let catalog = startup::load_catalog(catalog_path.as_deref(), &settings.catalog);

    let mut app = App::new(
        Arc::new(catalog),
        AssetResolver::new(settings.catalog.base_path.clone()),
        NotificationQueue::new(
            Duration::from_millis(settings.notifications.timeout_ms),
            settings.notifications.max_visible,
        ),
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let audio_tx = event_tx.clone();
    let audio_player = AudioPlayer::new(settings.audio.clone(), move |ev| {
        let _ = audio_tx.send(AppEvent::Audio(ev));
    });

    let clipboard_tx = event_tx.clone();
    let clipboard = ClipboardWorker::spawn(SystemClipboard::default, move |outcome| {
        let _ = clipboard_tx.send(AppEvent::Clipboard(outcome));
    });

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    events::spawn_input_thread(event_tx);

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let workers = event_loop::Workers {
            audio: &audio_player,
            clipboard: &clipboard,
        };
        let mut state = event_loop::EventLoopState::default();

        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &workers,
            &event_rx,
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("sonicvault stopped");
    run_result
}
