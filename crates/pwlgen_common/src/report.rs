//! Human-readable pulse reports for a single signal.

use serde::Serialize;
use std::fmt;

use crate::pulse::Pulse;
use crate::signal::{Signal, SignalMode};

/// Pulse summary of one signal: metadata, extracted pulses, and raw levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PulseReport {
    /// One-based position of the signal in its collection.
    pub index: usize,
    /// The signal's label as written.
    pub label: String,
    /// Playback mode.
    pub mode: SignalMode,
    /// Number of samples.
    pub length: usize,
    /// High runs in index order.
    pub pulses: Vec<Pulse>,
    /// The `0`/`1` sample string.
    pub levels: String,
}

impl PulseReport {
    /// Builds the report for `signal`, numbered `index` (one-based).
    pub fn new(index: usize, signal: &Signal) -> Self {
        Self {
            index,
            label: signal.label.clone(),
            mode: signal.mode,
            length: signal.waveform.len(),
            pulses: signal.waveform.pulses(),
            levels: signal.waveform.to_string(),
        }
    }

    /// Builds reports for a whole collection, numbered from 1.
    pub fn for_all(signals: &[Signal]) -> Vec<Self> {
        signals
            .iter()
            .enumerate()
            .map(|(i, s)| Self::new(i + 1, s))
            .collect()
    }
}

impl fmt::Display for PulseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Signal {}: {} ({})", self.index, self.label, self.mode)?;
        writeln!(f, "Length: {}", self.length)?;
        writeln!(f, "High pulses: {}", self.pulses.len())?;
        writeln!(f)?;
        for (i, p) in self.pulses.iter().enumerate() {
            writeln!(
                f,
                "Pulse {}: start = {}, width = {} clocks",
                i + 1,
                p.start,
                p.width
            )?;
        }
        writeln!(f, "Levels: {}", self.levels)
    }
}
