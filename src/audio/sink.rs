//! Utilities for creating `rodio` sinks from audio files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink`. Failures are logged and swallowed, matching the
//! fire-and-forget device contract.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

/// Create a paused `Sink` for the file at `path`, or `None` when the file
/// cannot be opened or decoded.
pub(super) fn create_sink(handle: &OutputStream, path: &Path) -> Option<Sink> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("failed to open {}: {e}", path.display());
            return None;
        }
    };

    let source = match Decoder::new(BufReader::new(file)) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("failed to decode {}: {e}", path.display());
            return None;
        }
    };

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Some(sink)
}
