use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Load settings by layering sources, later ones winning: struct
    /// defaults, then the optional TOML file, then `SEGNO__`-prefixed
    /// environment variables (`__` separates nesting levels).
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("SEGNO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject settings no scan could work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.library.extension.trim().trim_start_matches('.').is_empty() {
            return Err("library.extension must not be empty".to_string());
        }
        Ok(())
    }
}

/// The config file location: `SEGNO_CONFIG_PATH` when set, the XDG default
/// otherwise.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("SEGNO_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/segno/config.toml`, falling back to
/// `~/.config/segno/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("segno").join("config.toml"))
}
