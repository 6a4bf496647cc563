use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/sonicvault/config.toml` or `~/.config/sonicvault/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SONICVAULT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub notifications: NotificationSettings,
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Optional TOML catalog file. When unset the built-in library is used.
    pub path: Option<PathBuf>,
    /// Prefix joined with each record's filename to build its URL.
    /// May be a local directory or an `http(s)://` prefix.
    pub base_path: String,
    /// Resolve the built-in sounds to hosted demo previews.
    pub use_demo_urls: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: None,
            base_path: "sounds/".to_string(),
            use_demo_urls: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long each notification stays on screen (milliseconds).
    pub timeout_ms: u64,
    /// Optional cap on simultaneously visible notifications; oldest go first.
    pub max_visible: Option<usize>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            timeout_ms: crate::notify::DEFAULT_TIMEOUT.as_millis() as u64,
            max_visible: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Preview volume, 1.0 = unchanged.
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// Timeout for downloading remote previews (milliseconds).
    pub fetch_timeout_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            quit_fade_out_ms: 200,
            fetch_timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether list cards show the sound description under the title.
    pub show_descriptions: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "Open Asset Library".to_string(),
            show_descriptions: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Log file; defaults to `$XDG_STATE_HOME/sonicvault/sonicvault.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
