//! segno - a small music library organizer with single-track playback.
//!
//! The crate is organised around [`organizer::Organizer`], which owns an
//! ordered track collection and talks to two injected collaborators: a
//! [`library::TrackSource`] that reads tracks from a folder and a
//! [`audio::PlaybackDevice`] that plays one file at a time. The binary in
//! `main.rs` wires the real implementations together through [`runtime`].

pub mod audio;
pub mod config;
pub mod console;
pub mod library;
pub mod organizer;
pub mod runtime;
