//! In-memory form of an emitted Verilog-A module.
//!
//! The assembler builds a [`CompiledModel`]; [`crate::render`] turns it into
//! text and [`crate::probe`] evaluates it. Each exported signal becomes an
//! [`EmittedSignal`] with a target variable (the level before the transition
//! filter) and a [`SignalBody`] that selects that level.

/// Small offset added to periodic cycle-boundary crossings so an edge that
/// lands exactly on a boundary is not missed to rounding.
pub const CROSS_EPSILON: f64 = 1e-18;

/// One `if (x < before) target = value;` arm of a [`LevelChain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clause {
    /// Exclusive upper bound on the compared time.
    pub before: f64,
    /// Level assigned when the bound holds.
    pub value: f64,
}

/// An ordered if / else-if / else chain; the first matching clause wins.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelChain {
    /// Clauses in evaluation order.
    pub clauses: Vec<Clause>,
    /// Level of the trailing unconditional `else`.
    pub otherwise: f64,
}

impl LevelChain {
    /// Returns the level the chain assigns at time `x`.
    pub fn select(&self, x: f64) -> f64 {
        self.clauses
            .iter()
            .find(|c| x < c.before)
            .map_or(self.otherwise, |c| c.value)
    }
}

/// State and chain of a waveform that repeats forever.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicBody {
    /// Integer cycle counter variable.
    pub counter: String,
    /// Real in-period offset variable.
    pub phase: String,
    /// Repetition period in seconds (always > 0).
    pub period: f64,
    /// Per-sample chain compared against the phase.
    pub chain: LevelChain,
}

impl PeriodicBody {
    /// Cycle index the counter starts at for a simulation starting at `t0`.
    pub fn initial_cycle(&self, t0: f64) -> i64 {
        (t0 / self.period).floor() as i64
    }
}

/// How a signal's target level is selected each evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalBody {
    /// Chain compared against `$abstime`; holds low after the window.
    OneShot(LevelChain),
    /// Chain compared against the in-period phase.
    Periodic(PeriodicBody),
}

/// One exported signal inside the module.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedSignal {
    /// Output port / electrical node name.
    pub port: String,
    /// Real variable holding the level before the transition filter.
    pub target: String,
    /// Level assigned to `target` at the initial step.
    pub initial_level: f64,
    /// Level selection logic.
    pub body: SignalBody,
}

/// A complete module ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledModel {
    /// Module name (a legal identifier).
    pub module_name: String,
    /// Value of the `vlow` parameter.
    pub vlow: f64,
    /// Value of the `vhigh` parameter.
    pub vhigh: f64,
    /// Rise/fall time of every transition statement.
    pub edge_time: f64,
    /// Exported signals in declaration order.
    pub signals: Vec<EmittedSignal>,
}

impl CompiledModel {
    /// Port names in declaration order.
    pub fn ports(&self) -> impl Iterator<Item = &str> {
        self.signals.iter().map(|s| s.port.as_str())
    }

    /// Real state variables in declaration order.
    pub fn real_vars(&self) -> Vec<&str> {
        let mut vars = Vec::new();
        for s in &self.signals {
            vars.push(s.target.as_str());
            if let SignalBody::Periodic(p) = &s.body {
                vars.push(p.phase.as_str());
            }
        }
        vars
    }

    /// Integer state variables in declaration order.
    pub fn integer_vars(&self) -> Vec<&str> {
        self.signals
            .iter()
            .filter_map(|s| match &s.body {
                SignalBody::Periodic(p) => Some(p.counter.as_str()),
                SignalBody::OneShot(_) => None,
            })
            .collect()
    }

    /// Looks up an exported signal by port name.
    pub fn signal(&self, port: &str) -> Option<&EmittedSignal> {
        self.signals.iter().find(|s| s.port == port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> LevelChain {
        LevelChain {
            clauses: vec![
                Clause {
                    before: 1.0,
                    value: 0.0,
                },
                Clause {
                    before: 3.0,
                    value: 1.0,
                },
            ],
            otherwise: 0.5,
        }
    }

    #[test]
    fn select_first_matching_clause() {
        let c = chain();
        assert_eq!(c.select(0.0), 0.0);
        assert_eq!(c.select(0.999), 0.0);
        assert_eq!(c.select(1.0), 1.0);
        assert_eq!(c.select(2.5), 1.0);
        assert_eq!(c.select(3.0), 0.5);
    }

    #[test]
    fn declarations_follow_signal_order() {
        let model = CompiledModel {
            module_name: "m".into(),
            vlow: 0.0,
            vhigh: 1.0,
            edge_time: 0.0,
            signals: vec![
                EmittedSignal {
                    port: "a".into(),
                    target: "vsel_0".into(),
                    initial_level: 0.0,
                    body: SignalBody::OneShot(chain()),
                },
                EmittedSignal {
                    port: "b".into(),
                    target: "vsel_1".into(),
                    initial_level: 0.0,
                    body: SignalBody::Periodic(PeriodicBody {
                        counter: "n_1".into(),
                        phase: "tau_1".into(),
                        period: 4.0,
                        chain: chain(),
                    }),
                },
            ],
        };
        assert_eq!(model.ports().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(model.real_vars(), vec!["vsel_0", "vsel_1", "tau_1"]);
        assert_eq!(model.integer_vars(), vec!["n_1"]);
        assert!(model.signal("b").is_some());
        assert!(model.signal("c").is_none());
    }

    #[test]
    fn initial_cycle_floors() {
        let p = PeriodicBody {
            counter: "n".into(),
            phase: "tau".into(),
            period: 4.0,
            chain: chain(),
        };
        assert_eq!(p.initial_cycle(0.0), 0);
        assert_eq!(p.initial_cycle(9.0), 2);
    }
}
