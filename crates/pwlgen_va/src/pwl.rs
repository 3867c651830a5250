//! Reduction of a sampled waveform to piecewise-linear breakpoints.

use pwlgen_common::Waveform;

/// A level change in continuous time: from `time` on, the output is `level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Time in seconds.
    pub time: f64,
    /// Level in volts.
    pub level: f64,
}

/// Compresses `waveform` to one breakpoint at time 0 plus one per level change.
///
/// Index `i` maps to time `i * quantum`; levels map to `low`/`high`. The list
/// is empty only for an empty waveform.
pub fn reduce(waveform: &Waveform, quantum: f64, low: f64, high: f64) -> Vec<Breakpoint> {
    let levels = waveform.levels();
    let Some(&first) = levels.first() else {
        return Vec::new();
    };

    let mut points = vec![Breakpoint {
        time: 0.0,
        level: first.voltage(low, high),
    }];
    for (i, pair) in levels.windows(2).enumerate() {
        if pair[1] != pair[0] {
            points.push(Breakpoint {
                time: (i + 1) as f64 * quantum,
                level: pair[1].voltage(low, high),
            });
        }
    }
    points
}
