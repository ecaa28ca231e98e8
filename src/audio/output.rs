//! Rodio-backed playback device.
//!
//! A dedicated thread owns the output stream and at most one sink; the
//! device itself is just a command channel into that thread. Machines
//! without audio hardware get a draining thread and a single warning, so
//! everything else behaves identically there.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use rodio::{OutputStreamBuilder, Sink};

use super::sink::create_sink;
use super::types::{DeviceCmd, PlaybackDevice};

/// Plays one file at a time through the default rodio output.
///
/// Dropping the device closes the command channel, which ends the output
/// thread and stops whatever was playing.
pub struct RodioDevice {
    tx: Sender<DeviceCmd>,
}

impl RodioDevice {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<DeviceCmd>();
        spawn_output_thread(rx);
        Self { tx }
    }
}

impl Default for RodioDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackDevice for RodioDevice {
    fn start_playing(&mut self, path: &Path) {
        let _ = self.tx.send(DeviceCmd::Play(path.to_path_buf()));
    }

    fn stop(&mut self) {
        let _ = self.tx.send(DeviceCmd::Stop);
    }
}

fn spawn_output_thread(rx: Receiver<DeviceCmd>) {
    thread::spawn(move || {
        // The output stream is not Send; it lives and dies on this thread.
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!("no audio output device, playback disabled: {e}");
                while rx.recv().is_ok() {}
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy on plain console output.
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;

        while let Ok(cmd) = rx.recv() {
            match cmd {
                DeviceCmd::Play(path) => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    if let Some(new_sink) = create_sink(&stream, &path) {
                        new_sink.play();
                        sink = Some(new_sink);
                    }
                }
                DeviceCmd::Stop => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                }
            }
        }

        // Channel closed: the device was dropped.
        if let Some(s) = sink.take() {
            s.stop();
        }
    });
}
