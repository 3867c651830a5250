//! Emitter for waveforms that repeat forever.
//!
//! Instead of comparing `$abstime` against an ever-growing list of absolute
//! edges, the module keeps an integer cycle counter that a rising `cross`
//! event bumps at every period boundary, and recomputes the in-period phase
//! `tau = $abstime - n * period` each evaluation. State stays bounded no
//! matter how long the simulation runs.

use pwlgen_common::Waveform;

use crate::model::{Clause, LevelChain, PeriodicBody};

/// Builds the periodic body for `waveform`.
///
/// Emits one clause per sample (not per breakpoint): `tau < (k + 1) * quantum`
/// selects sample `k`. The trailing `else` repeats the last sample's level.
/// Returns `None` when the period `len * quantum` is not positive; the caller
/// then falls back to one-shot emission.
pub fn emit_periodic(
    waveform: &Waveform,
    quantum: f64,
    low: f64,
    high: f64,
    counter: String,
    phase: String,
) -> Option<PeriodicBody> {
    let period = waveform.len() as f64 * quantum;
    if period <= 0.0 {
        return None;
    }

    let levels = waveform.levels();
    let clauses = levels
        .iter()
        .enumerate()
        .map(|(k, level)| Clause {
            before: (k + 1) as f64 * quantum,
            value: level.voltage(low, high),
        })
        .collect();
    let otherwise = levels.last()?.voltage(low, high);

    Some(PeriodicBody {
        counter,
        phase,
        period,
        chain: LevelChain { clauses, otherwise },
    })
}
