//! Playback device: trait plus the rodio-backed implementation.
//!
//! The organizer drives playback through the `PlaybackDevice` trait; the
//! rodio implementation keeps the output stream on a dedicated thread and
//! accepts commands over a channel.

mod output;
mod sink;
mod types;

pub use output::RodioDevice;
pub use types::PlaybackDevice;
