use std::time::Duration;

use crate::config::TrackField;

use super::model::Track;

/// Build a one-line description of `track` from the configured `fields`,
/// joined with `sep`.
///
/// This composes metadata fields (artist, title, genre, album, duration,
/// filename, path, play count) in the configured order and falls back to
/// the title when no parts were produced.
pub fn details_from_fields(track: &Track, fields: &[TrackField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackField::Artist => {
                let a = track.artist.trim();
                if !a.is_empty() {
                    parts.push(a.to_string());
                }
            }
            TrackField::Title => {
                let t = track.title.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            TrackField::Genre => {
                if let Some(g) = track.genre().map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(g.to_string());
                }
            }
            TrackField::Album => {
                if let Some(a) = track.album.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(a.to_string());
                }
            }
            TrackField::Duration => {
                if let Some(d) = track.duration {
                    parts.push(format_mmss(d));
                }
            }
            TrackField::Filename => {
                if let Some(stem) = track.path.file_stem().and_then(|s| s.to_str()) {
                    if !stem.trim().is_empty() {
                        parts.push(stem.to_string());
                    }
                }
            }
            TrackField::Path => {
                parts.push(track.path.display().to_string());
            }
            TrackField::Plays => {
                parts.push(format!("{} plays", track.play_count()));
            }
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
