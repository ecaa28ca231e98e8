//! Track model and metadata reading.
//!
//! The `Track` value object lives in `library::model`; `library::reader`
//! holds the `TrackSource` trait plus the walkdir/lofty implementation
//! that turns folders full of audio files into tracks.

mod details;
mod model;
mod reader;

pub use details::*;
pub use model::*;
pub use reader::*;

#[cfg(test)]
mod tests;
