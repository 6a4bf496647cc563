//! Utilities for creating `rodio` sinks from decoded clips.

use std::io::Cursor;

use rodio::{Decoder, OutputStream, Sink};

/// Create a playing `Sink` on `stream` for `source` at `volume`.
pub(super) fn create_sink(
    stream: &OutputStream,
    source: Decoder<Cursor<Vec<u8>>>,
    volume: f32,
) -> Sink {
    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.play();
    sink
}

/// Ramp `sink` down to silence over `fade_out_ms` milliseconds.
pub(super) fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    let start = sink.volume();
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(start * (1.0 - t));
        std::thread::sleep(std::time::Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
