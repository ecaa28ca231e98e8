use crate::config;

/// Load settings, falling back to defaults on any problem.
///
/// This runs before the tracing subscriber exists (the log filter is itself
/// a setting), so problems go to stderr directly.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => s,
            Err(msg) => {
                eprintln!("segno: invalid config, using defaults: {msg}");
                config::Settings::default()
            }
        },
        Err(e) => {
            eprintln!("segno: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
