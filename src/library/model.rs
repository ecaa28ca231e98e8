use std::path::PathBuf;
use std::time::Duration;

/// A single track in the library.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Location of the underlying audio file.
    pub path: PathBuf,
    /// Artist name as read by the track source.
    pub artist: String,
    /// Track title as read by the track source.
    pub title: String,
    /// Album title, when the file carries one in its tags.
    pub album: Option<String>,
    /// Track length, when the file carries one in its tags.
    pub duration: Option<Duration>,
    genre: Option<String>,
    play_count: u32,
}

impl Track {
    /// A fresh track: no genre, play count zero.
    pub fn new(
        path: impl Into<PathBuf>,
        artist: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            artist: artist.into(),
            title: title.into(),
            album: None,
            duration: None,
            genre: None,
            play_count: 0,
        }
    }

    /// Replace the genre tag. Any string is accepted, no validation.
    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = Some(genre.into());
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// How many times playback of this track has been started.
    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    // The count only ever moves up, and only through the play path.
    pub(crate) fn increment_play_count(&mut self) {
        self.play_count += 1;
    }

    /// One-line summary: `artist - title`, with ` [genre]` appended when a
    /// non-empty genre is set.
    pub fn details(&self) -> String {
        let mut details = format!("{} - {}", self.artist, self.title);
        if let Some(genre) = self.genre.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
            details.push_str(&format!(" [{genre}]"));
        }
        details
    }
}
