//! Run-length extraction of high pulses from a binary waveform.

use serde::Serialize;
use std::fmt;

use crate::level::Level;

/// A maximal run of high samples: the waveform is high on `[start, start + width)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Pulse {
    /// Index of the first high sample.
    pub start: usize,
    /// Number of consecutive high samples (always > 0).
    pub width: usize,
}

impl Pulse {
    /// Index one past the last high sample.
    pub fn end(&self) -> usize {
        self.start + self.width
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.width)
    }
}

/// Scans `samples` once and returns every high run in order.
///
/// A run that is still open at the end of the buffer is clamped to the
/// buffer length rather than dropped.
pub fn find_high_pulses(samples: &[Level]) -> Vec<Pulse> {
    let mut pulses = Vec::new();
    let mut in_pulse = false;
    let mut start = 0;

    for (i, level) in samples.iter().enumerate() {
        match (level, in_pulse) {
            (Level::High, false) => {
                in_pulse = true;
                start = i;
            }
            (Level::Low, true) => {
                in_pulse = false;
                pulses.push(Pulse {
                    start,
                    width: i - start,
                });
            }
            _ => {}
        }
    }

    if in_pulse {
        pulses.push(Pulse {
            start,
            width: samples.len() - start,
        });
    }

    pulses
}
