//! Emitter for waveforms that play once and then return to the low level.

use crate::model::{Clause, LevelChain};
use crate::pwl::Breakpoint;

/// Builds the `$abstime` chain for a one-shot signal.
///
/// Each breakpoint after the first closes the span of the level before it,
/// so clause `j` tests `t < t_j` and assigns level `j - 1`. The last level is
/// held until `window_end`, and `low` is assigned after that. A waveform
/// that never changes reduces to `if (t < window_end) level_0; else low`.
///
/// `breakpoints` must not be empty.
pub fn emit_one_shot(breakpoints: &[Breakpoint], window_end: f64, low: f64) -> LevelChain {
    let mut clauses: Vec<Clause> = breakpoints
        .windows(2)
        .map(|pair| Clause {
            before: pair[1].time,
            value: pair[0].level,
        })
        .collect();

    if let Some(last) = breakpoints.last() {
        clauses.push(Clause {
            before: window_end,
            value: last.level,
        });
    }

    LevelChain {
        clauses,
        otherwise: low,
    }
}
