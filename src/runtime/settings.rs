use crate::config;

// Logging is not up yet when settings load, so problems go to stderr.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("sonicvault: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            eprintln!("sonicvault: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
