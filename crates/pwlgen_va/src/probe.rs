//! Evaluation of a compiled model's target levels without a simulator.
//!
//! The probe follows the emitted semantics for a simulation that starts at
//! time 0: the initial step sets every cycle counter to `floor(0 / period)`,
//! and each rising `cross` of `t - (n + 1) * period + epsilon` advances the
//! counter by one.

use crate::model::{CompiledModel, PeriodicBody, SignalBody, CROSS_EPSILON};

impl PeriodicBody {
    /// Counter value after every boundary crossing up to time `t`.
    pub fn cycle_at(&self, t: f64) -> i64 {
        let crossed = |n: i64| t - (n + 1) as f64 * self.period + CROSS_EPSILON > 0.0;
        // Jump near the answer, then settle on the exact crossing count.
        let mut n = self
            .initial_cycle(0.0)
            .max(((t + CROSS_EPSILON) / self.period).floor() as i64 - 1);
        while crossed(n) {
            n += 1;
        }
        n
    }

    /// In-period offset `tau` at time `t`.
    pub fn phase_at(&self, t: f64) -> f64 {
        t - self.cycle_at(t) as f64 * self.period
    }
}

impl CompiledModel {
    /// Returns the level assigned to `port`'s target variable at absolute
    /// time `t`, before the transition filter. `None` for an unknown port.
    pub fn probe(&self, port: &str, t: f64) -> Option<f64> {
        let signal = self.signal(port)?;
        let level = match &signal.body {
            SignalBody::OneShot(chain) => chain.select(t),
            SignalBody::Periodic(p) => p.chain.select(p.phase_at(t)),
        };
        Some(level)
    }
}
