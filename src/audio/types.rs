//! Audio-related small types.
//!
//! This module defines the playback-device trait the organizer talks to
//! and the commands understood by the rodio output thread.

use std::path::{Path, PathBuf};

/// A device that plays at most one audio file at a time, fire-and-forget.
///
/// Implementations suppress their own failures: a file that cannot be
/// opened or decoded is logged and skipped, never reported to the caller.
pub trait PlaybackDevice: Send {
    /// Begin asynchronous audio output for the file at `path` and return
    /// immediately.
    fn start_playing(&mut self, path: &Path);

    /// Stop any current playback. Stopping an idle device is a no-op.
    fn stop(&mut self);
}

#[derive(Debug)]
pub(super) enum DeviceCmd {
    /// Start playing the file at the given path.
    Play(PathBuf),
    /// Stop playback immediately.
    Stop,
}
