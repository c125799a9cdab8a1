use serde::Serialize;

use crate::encoding::{Bit, Polarity, SamplePoint, SignalLevel, bits_to_string};

/// One full encoding run in the shape the chart front end consumes: each
/// point serializes with the scheme names as keys and integer levels.
/// Export is one-way; the tool never reads a dump back.
#[derive(Serialize)]
pub struct WaveformDump {
    pub bits: String,
    pub initial_signal: SignalLevel,
    pub points: Vec<SamplePoint>,
}

impl WaveformDump {
    pub fn new(bits: &[Bit], initial: Polarity, points: Vec<SamplePoint>) -> Self {
        Self {
            bits: bits_to_string(bits),
            initial_signal: initial.level(),
            points,
        }
    }
}
