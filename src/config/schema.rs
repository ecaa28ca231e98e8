use serde::Deserialize;

/// Top-level application settings.
///
/// Read from `$XDG_CONFIG_HOME/segno/config.toml` (or `~/.config/segno/config.toml`)
/// as TOML. `SEGNO__`-prefixed environment variables override file values,
/// with `__` separating nesting levels; struct defaults fill everything else,
/// so both the file and any single key may be absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub display: DisplaySettings,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            display: DisplaySettings::default(),
            log: LogSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder scanned at startup (the first CLI argument overrides it).
    pub folder: String,
    /// File extension to treat as audio (case-insensitive, dot optional).
    pub extension: String,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            folder: "audio".to_string(),
            extension: "mp3".to_string(),
            recursive: false,
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which track fields make up the "Now playing:" line, and in what order.
    ///
    /// Example: ["artist", "title", "album"]
    pub now_playing_fields: Vec<TrackField>,

    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            now_playing_fields: vec![TrackField::Artist, TrackField::Title],
            now_playing_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default `tracing` filter, used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "segno=info".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Artist,
    Title,
    Genre,
    Album,
    Duration,
    Filename,
    Path,
    Plays,
}
