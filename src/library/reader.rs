use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;
use lofty::probe::Probe;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

/// Turns files on disk into `Track` values.
///
/// The organizer only ever talks to this trait, so tests and alternative
/// backends slot in without touching the collection logic.
pub trait TrackSource: Send {
    /// Read every file under `folder` whose extension matches `extension`
    /// into a track, one per file.
    ///
    /// A missing or unreadable folder yields an empty list, not an error.
    /// The order is source-defined but deterministic.
    fn read_tracks(&self, folder: &Path, extension: &str) -> Vec<Track>;

    /// Build a single track from one path. Never fails: metadata problems
    /// degrade to filename-derived fields.
    fn read_track(&self, path: &Path) -> Track;
}

/// Filesystem source: walks a folder with walkdir and reads tags with lofty.
#[derive(Debug, Clone)]
pub struct FolderReader {
    recursive: bool,
    follow_links: bool,
}

impl FolderReader {
    /// Flat scan of the folder itself, following symlinks.
    pub fn new() -> Self {
        Self {
            recursive: false,
            follow_links: true,
        }
    }

    pub fn from_settings(settings: &LibrarySettings) -> Self {
        Self {
            recursive: settings.recursive,
            follow_links: settings.follow_links,
        }
    }
}

impl Default for FolderReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackSource for FolderReader {
    fn read_tracks(&self, folder: &Path, extension: &str) -> Vec<Track> {
        let wanted = normalize_extension(extension);
        if wanted.is_empty() {
            return Vec::new();
        }
        if !folder.is_dir() {
            tracing::warn!("library folder {} is not a directory", folder.display());
            return Vec::new();
        }

        let mut walker = WalkDir::new(folder).follow_links(self.follow_links);
        if !self.recursive {
            // Non-recursive = only the root directory.
            walker = walker.max_depth(1);
        }

        let mut tracks: Vec<Track> = Vec::new();
        for entry in walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(Result::ok)
        {
            let path = entry.path();
            if path.is_file() && has_extension(path, &wanted) {
                tracks.push(read_file(path));
            }
        }

        tracks.sort_by_cached_key(|t| (t.details().to_lowercase(), t.path.clone()));
        tracks
    }

    fn read_track(&self, path: &Path) -> Track {
        read_file(path)
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.to_ascii_lowercase() == wanted)
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Split a file stem on the `"Artist - Title"` naming convention.
fn split_stem(stem: &str) -> Option<(String, String)> {
    let (artist, title) = stem.split_once(" - ").or_else(|| stem.split_once('-'))?;
    let artist = artist.trim();
    let title = title.trim();
    if artist.is_empty() || title.is_empty() {
        return None;
    }
    Some((artist.to_string(), title.to_string()))
}

fn read_file(path: &Path) -> Track {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    // The filename convention carries us when no tags are readable.
    let (mut artist, mut title) = match split_stem(&stem) {
        Some(pair) => pair,
        None => ("unknown".to_string(), stem),
    };
    let mut album: Option<String> = None;
    let mut duration: Option<Duration> = None;

    match Probe::open(path).and_then(|p| p.read()) {
        Ok(tagged) => {
            duration = Some(tagged.properties().duration());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title() {
                    let v = v.trim();
                    if !v.is_empty() {
                        title = v.to_string();
                    }
                }
                if let Some(v) = tag.artist() {
                    let v = v.trim();
                    if !v.is_empty() {
                        artist = v.to_string();
                    }
                }
                if let Some(v) = tag.album() {
                    let v = v.trim();
                    if !v.is_empty() {
                        album = Some(v.to_string());
                    }
                }
            }
        }
        Err(e) => {
            tracing::debug!("no readable tags in {}: {e}", path.display());
        }
    }

    let mut track = Track::new(path, artist, title);
    track.album = album;
    track.duration = duration;
    track
}
