//! Configuration loader and schema types.
//!
//! The schema covers the library scan, the now-playing line and logging;
//! `Settings::load` layers environment variables over an optional TOML
//! file found through `SEGNO_CONFIG_PATH` or the XDG config directory.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
