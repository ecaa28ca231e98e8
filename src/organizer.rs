//! Organizer module: the core collection and its playback state machine.
//!
//! The `Organizer` model lives in `organizer::model` and owns the track
//! collection, the injected collaborators and the playback flag.

mod model;

pub use model::*;
