//! Organizer model types: `Organizer`, `PlayOutcome` and `IndexError`.
//!
//! The `Organizer` struct owns the ordered track collection, the injected
//! track source and playback device, and the flag tracking whether a
//! playback session is in progress.

use std::path::Path;

use thiserror::Error;

use crate::audio::PlaybackDevice;
use crate::library::{Track, TrackSource};

/// Why an index-taking operation refused the given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Index cannot be negative: {0}")]
    Negative(i64),
    #[error("Index is too large: {0}")]
    TooLarge(i64),
}

/// What happened when a play operation was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Playback started for the track at `index`.
    Started { index: usize },
    /// A session was already in progress; nothing happened.
    AlreadyPlaying,
    /// The index was rejected; nothing happened.
    InvalidIndex(IndexError),
    /// The collection was empty; nothing happened.
    Empty,
}

/// The music organizer: an ordered track collection plus a playback session.
///
/// Indices cross this API as `i64` so that negative values reach the
/// validator and get their own diagnostic instead of being unrepresentable.
pub struct Organizer {
    tracks: Vec<Track>,
    source: Box<dyn TrackSource>,
    device: Box<dyn PlaybackDevice>,
    sounding: bool,
}

impl Organizer {
    /// Create an empty organizer with the given collaborators.
    pub fn new(source: Box<dyn TrackSource>, device: Box<dyn PlaybackDevice>) -> Self {
        Self {
            tracks: Vec::new(),
            source,
            device,
            sounding: false,
        }
    }

    /// Read every matching file under `folder` and append the results.
    /// Returns how many tracks were added.
    pub fn load_library(&mut self, folder: &Path, extension: &str) -> usize {
        let loaded = self.source.read_tracks(folder, extension);
        let count = loaded.len();
        for track in loaded {
            self.add_track(track);
        }
        count
    }

    /// Read a single file through the track source and append it.
    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        let track = self.source.read_track(path.as_ref());
        self.add_track(track);
    }

    /// Append a caller-constructed track.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The full collection, in insertion order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Cursor-style traversal; yields exactly the elements of `tracks()`,
    /// in the same order.
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Look up a single track, with full index diagnostics.
    pub fn track_at(&self, index: i64) -> Result<&Track, IndexError> {
        let index = self.check_index(index)?;
        Ok(&self.tracks[index])
    }

    /// Every track whose artist contains `search` as a literal,
    /// case-sensitive substring, in collection order.
    pub fn by_artist(&self, search: &str) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| t.artist.contains(search))
            .collect()
    }

    /// Every track whose title contains `search` as a literal,
    /// case-sensitive substring, in collection order.
    pub fn find_in_title(&self, search: &str) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| t.title.contains(search))
            .collect()
    }

    /// Remove and return the track at `index`; later tracks shift left.
    pub fn remove_track(&mut self, index: i64) -> Result<Track, IndexError> {
        let index = self.check_index(index)?;
        Ok(self.tracks.remove(index))
    }

    /// Remove every track whose artist contains `search`, preserving the
    /// order of the survivors. Returns how many were removed.
    pub fn remove_by_artist(&mut self, search: &str) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| !t.artist.contains(search));
        before - self.tracks.len()
    }

    /// Remove every track whose title contains `search`, preserving the
    /// order of the survivors. Returns how many were removed.
    pub fn remove_by_title(&mut self, search: &str) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| !t.title.contains(search));
        before - self.tracks.len()
    }

    /// Assign the genre of the track at `index`.
    ///
    /// Checks its own bounds silently and reports success as a bool; unlike
    /// the index-taking operations it never produces an `IndexError`.
    pub fn set_genre(&mut self, index: i64, genre: &str) -> bool {
        match usize::try_from(index) {
            Ok(i) if i < self.tracks.len() => {
                self.tracks[i].set_genre(genre);
                true
            }
            _ => false,
        }
    }

    /// Start playing the track at `index`.
    ///
    /// A session already in progress wins over everything else: nothing
    /// happens then, regardless of index validity. On a successful start
    /// the track's play count goes up before the device is asked to play.
    pub fn play_track(&mut self, index: i64) -> PlayOutcome {
        if self.sounding {
            return PlayOutcome::AlreadyPlaying;
        }
        let index = match self.check_index(index) {
            Ok(i) => i,
            Err(e) => return PlayOutcome::InvalidIndex(e),
        };

        self.tracks[index].increment_play_count();
        let track = &self.tracks[index];
        self.device.start_playing(&track.path);
        self.sounding = true;
        PlayOutcome::Started { index }
    }

    /// Start playing the first track.
    ///
    /// Empty and idle is a silent no-op; a session in progress is reported
    /// the same way as in `play_track`.
    pub fn play_first(&mut self) -> PlayOutcome {
        if self.sounding {
            return PlayOutcome::AlreadyPlaying;
        }
        if self.tracks.is_empty() {
            return PlayOutcome::Empty;
        }
        self.play_track(0)
    }

    /// Stop playback and mark the session idle, unconditionally.
    pub fn stop_playing(&mut self) {
        self.device.stop();
        self.sounding = false;
    }

    /// Whether a playback session is believed to be in progress.
    ///
    /// The device is fire-and-forget and reports no end-of-track, so a
    /// track that finishes on its own leaves this flag set until
    /// `stop_playing` is called.
    pub fn is_playing(&self) -> bool {
        self.sounding
    }

    fn check_index(&self, index: i64) -> Result<usize, IndexError> {
        if index < 0 {
            return Err(IndexError::Negative(index));
        }
        match usize::try_from(index) {
            Ok(i) if i < self.tracks.len() => Ok(i),
            _ => Err(IndexError::TooLarge(index)),
        }
    }
}
