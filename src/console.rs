//! Console presentation for organizer results.
//!
//! Everything here builds the exact lines the binary prints; nothing in
//! the core collection writes to stdout. The now-playing line is
//! configurable through the display settings.

use crate::config::DisplaySettings;
use crate::library::{Track, details_from_fields};
use crate::organizer::{IndexError, Organizer, PlayOutcome};

/// Formats organizer results for the terminal.
pub struct Console {
    display: DisplaySettings,
}

impl Console {
    pub fn new(display: DisplaySettings) -> Self {
        Self { display }
    }

    /// The startup report.
    pub fn library_loaded(&self, count: usize) -> String {
        format!("Music library loaded. {count} tracks.")
    }

    /// One numbered entry, or the index diagnostic when the lookup failed.
    pub fn track_entry(&self, index: i64, lookup: Result<&Track, IndexError>) -> String {
        match lookup {
            Ok(track) => format!("Track {index}: {}", track.details()),
            Err(e) => e.to_string(),
        }
    }

    /// The full listing: a header plus one details line per track.
    pub fn listing(&self, organizer: &Organizer) -> String {
        let mut out = String::from("Track listing:");
        for track in organizer.iter() {
            out.push('\n');
            out.push_str(&track.details());
        }
        out
    }

    /// One details line per search hit.
    pub fn search_results(&self, tracks: &[&Track]) -> String {
        tracks
            .iter()
            .map(|t| t.details())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// What to print for a play attempt; `None` means stay quiet.
    pub fn play_report(&self, organizer: &Organizer, outcome: PlayOutcome) -> Option<String> {
        match outcome {
            PlayOutcome::Started { index } => organizer.tracks().get(index).map(|track| {
                format!(
                    "Now playing: {}",
                    details_from_fields(
                        track,
                        &self.display.now_playing_fields,
                        &self.display.now_playing_separator,
                    )
                )
            }),
            PlayOutcome::AlreadyPlaying => {
                Some("Playback already in progress, cannot start a new track.".to_string())
            }
            PlayOutcome::InvalidIndex(e) => Some(e.to_string()),
            PlayOutcome::Empty => None,
        }
    }

    /// State line for the playback flag.
    pub fn playback_status(&self, playing: bool) -> String {
        if playing {
            "Playback is in progress.".to_string()
        } else {
            "Nothing is playing.".to_string()
        }
    }
}
