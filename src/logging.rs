//! File-backed `tracing` setup.
//!
//! The terminal belongs to the TUI, so log lines go to a file instead of
//! stderr. `RUST_LOG` takes precedence over `logging.level`.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Install the global subscriber. Returns the log file in use.
pub fn init(
    settings: &LoggingSettings,
) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    let path = match &settings.file {
        Some(p) => p.clone(),
        None => default_log_path().ok_or("no HOME or XDG_STATE_HOME to place the log file")?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()?;

    Ok(path)
}

/// `$XDG_STATE_HOME/sonicvault/sonicvault.log`, or under `~/.local/state`.
pub fn default_log_path() -> Option<PathBuf> {
    log_path_in(std::env::var_os("XDG_STATE_HOME"), std::env::var_os("HOME"))
}

fn log_path_in(state_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = match (state_home, home) {
        (Some(state), _) if !state.is_empty() => PathBuf::from(state),
        (_, Some(home)) => PathBuf::from(home).join(".local").join("state"),
        _ => return None,
    };
    Some(base.join("sonicvault").join("sonicvault.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_prefers_xdg_state_home() {
        assert_eq!(
            log_path_in(Some("/tmp/state".into()), Some("/tmp/home".into())),
            Some(PathBuf::from("/tmp/state/sonicvault/sonicvault.log"))
        );
    }

    #[test]
    fn log_path_falls_back_to_home_local_state() {
        assert_eq!(
            log_path_in(None, Some("/tmp/home".into())),
            Some(PathBuf::from("/tmp/home/.local/state/sonicvault/sonicvault.log"))
        );
        assert_eq!(
            log_path_in(Some("".into()), Some("/tmp/home".into())),
            Some(PathBuf::from("/tmp/home/.local/state/sonicvault/sonicvault.log"))
        );
        assert_eq!(log_path_in(None, None), None);
    }
}
