use std::{env, path::PathBuf};

use super::schema::Settings;

/// Upper bound for `notifications.timeout_ms` (one hour).
const MAX_NOTIFICATION_TIMEOUT_MS: u64 = 60 * 60 * 1000;

/// Configuration loading helpers.
///
/// `Settings::load` layers an optional config file under environment
/// variables (prefix `SONICVAULT__`) and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SONICVAULT")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.notifications.timeout_ms == 0 {
            return Err("notifications.timeout_ms must be >= 1".to_string());
        }
        if self.notifications.timeout_ms > MAX_NOTIFICATION_TIMEOUT_MS {
            return Err(format!(
                "notifications.timeout_ms must be <= {MAX_NOTIFICATION_TIMEOUT_MS}"
            ));
        }
        if self.notifications.max_visible == Some(0) {
            return Err("notifications.max_visible must be >= 1 when set".to_string());
        }
        if !(0.0..=2.0).contains(&self.audio.volume) {
            return Err("audio.volume must be within 0.0..=2.0".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `SONICVAULT_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SONICVAULT_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/sonicvault/config.toml`
/// or `~/.config/sonicvault/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("sonicvault").join("config.toml"))
}
