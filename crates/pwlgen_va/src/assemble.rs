//! Assembly of per-signal fragments into one module.

use pwlgen_common::{IdentAllocator, Signal, SignalMode};
use tracing::{debug, warn};

use crate::error::ExportError;
use crate::model::{CompiledModel, EmittedSignal, SignalBody};
use crate::oneshot::emit_one_shot;
use crate::params::{ExportParams, ResolvedParams};
use crate::periodic::emit_periodic;
use crate::pwl::reduce;

/// Validates `params` and compiles `signals` into a module.
///
/// All parameter validation happens before any emission; on error nothing
/// is produced.
pub fn compile(signals: &[Signal], params: &ExportParams) -> Result<CompiledModel, ExportError> {
    let resolved = params.resolve()?;
    Ok(assemble(signals, &resolved))
}

/// Compiles `signals` with already-validated parameters.
///
/// The module name is issued first, then port names for every signal in
/// order, then internal variable names for the signals that are emitted, all
/// from one namespace. A signal
/// with an empty waveform keeps its place in the naming order but is
/// otherwise skipped.
pub fn assemble(signals: &[Signal], params: &ResolvedParams) -> CompiledModel {
    let mut idents = IdentAllocator::with_reserved();
    let module_name = idents.issue(&params.module_name);
    debug!(
        module = %module_name,
        clock = %params.clock_period,
        quantum = params.quantum,
        signals = signals.len(),
        "assembling module"
    );
    let ports: Vec<String> = signals.iter().map(|s| idents.issue(&s.label)).collect();

    let mut emitted = Vec::with_capacity(signals.len());
    for (idx, (signal, port)) in signals.iter().zip(ports).enumerate() {
        let breakpoints = reduce(&signal.waveform, params.quantum, params.vlow, params.vhigh);
        let Some(first) = breakpoints.first() else {
            debug!(%port, "skipping signal with empty waveform");
            continue;
        };
        let initial_level = first.level;
        let target = idents.issue(&format!("vsel_{idx}"));

        let periodic = match signal.mode {
            SignalMode::Periodic => {
                let counter = idents.issue(&format!("n_{idx}"));
                let phase = idents.issue(&format!("tau_{idx}"));
                let body = emit_periodic(
                    &signal.waveform,
                    params.quantum,
                    params.vlow,
                    params.vhigh,
                    counter,
                    phase,
                );
                if body.is_none() {
                    warn!(%port, "non-positive period, emitting as one-shot");
                }
                body
            }
            SignalMode::OneShot => None,
        };

        let body = match periodic {
            Some(p) => SignalBody::Periodic(p),
            None => {
                let window_end = signal.waveform.len() as f64 * params.quantum;
                SignalBody::OneShot(emit_one_shot(&breakpoints, window_end, params.vlow))
            }
        };

        debug!(
            %port,
            mode = %signal.mode,
            breakpoints = breakpoints.len(),
            "emitted signal"
        );
        emitted.push(EmittedSignal {
            port,
            target,
            initial_level,
            body,
        });
    }

    CompiledModel {
        module_name,
        vlow: params.vlow,
        vhigh: params.vhigh,
        edge_time: params.edge_time,
        signals: emitted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwlgen_common::{TimeQuantity, Waveform};

    fn params(quantum: f64) -> ResolvedParams {
        ResolvedParams {
            clock_period: TimeQuantity::from_seconds(quantum * 2.0),
            quantum,
            vlow: 0.0,
            vhigh: 1.0,
            edge_time: 1e-12,
            module_name: "pwl_waves".into(),
        }
    }

    fn signal(label: &str, pattern: &str, mode: SignalMode) -> Signal {
        Signal::new(label, pattern.parse::<Waveform>().unwrap(), mode)
    }

    #[test]
    fn ports_follow_signal_order() {
        let model = assemble(
            &[
                signal("A", "0101", SignalMode::OneShot),
                signal("A", "0011", SignalMode::Periodic),
                signal("1x", "1000", SignalMode::OneShot),
            ],
            &params(1.0),
        );
        assert_eq!(model.ports().collect::<Vec<_>>(), vec!["A", "A_1", "w_1x"]);
    }

    #[test]
    fn periodic_signal_declares_counter_and_phase() {
        let model = assemble(
            &[
                signal("EN", "0011", SignalMode::OneShot),
                signal("CLK", "0101", SignalMode::Periodic),
            ],
            &params(1.0),
        );
        assert_eq!(model.real_vars(), vec!["vsel_0", "vsel_1", "tau_1"]);
        assert_eq!(model.integer_vars(), vec!["n_1"]);
        match &model.signals[1].body {
            SignalBody::Periodic(p) => assert_eq!(p.period, 4.0),
            other => panic!("expected periodic body, got {other:?}"),
        }
    }

    #[test]
    fn initial_level_is_first_sample() {
        let model = assemble(
            &[
                signal("a", "1100", SignalMode::OneShot),
                signal("b", "0011", SignalMode::Periodic),
            ],
            &params(1.0),
        );
        assert_eq!(model.signals[0].initial_level, 1.0);
        assert_eq!(model.signals[1].initial_level, 0.0);
    }

    #[test]
    fn empty_waveform_is_skipped() {
        let model = assemble(
            &[
                signal("gone", "", SignalMode::Periodic),
                signal("kept", "", SignalMode::OneShot),
            ],
            &params(1.0),
        );
        assert!(model.signals.is_empty());
        assert!(model.real_vars().is_empty());
        assert!(model.integer_vars().is_empty());
    }

    #[test]
    fn skipped_signal_still_consumes_its_name() {
        let model = assemble(
            &[
                signal("x", "", SignalMode::OneShot),
                signal("x", "01", SignalMode::OneShot),
            ],
            &params(1.0),
        );
        assert_eq!(model.ports().collect::<Vec<_>>(), vec!["x_1"]);
        assert_eq!(model.signals[0].target, "vsel_1");
    }

    #[test]
    fn label_cannot_shadow_internal_variable() {
        let model = assemble(
            &[
                signal("vsel_0", "01", SignalMode::OneShot),
                signal("vlow", "10", SignalMode::OneShot),
            ],
            &params(1.0),
        );
        assert_eq!(model.signals[0].port, "vsel_0");
        assert_eq!(model.signals[0].target, "vsel_0_1");
        assert_eq!(model.signals[1].port, "vlow_1");
    }

    #[test]
    fn non_positive_quantum_downgrades_to_one_shot() {
        let model = assemble(&[signal("p", "0110", SignalMode::Periodic)], &params(0.0));
        assert!(matches!(model.signals[0].body, SignalBody::OneShot(_)));
    }

    #[test]
    fn module_name_is_sanitized() {
        let mut p = params(1.0);
        p.module_name = "my waves".into();
        assert_eq!(assemble(&[], &p).module_name, "my_waves");
    }

    #[test]
    fn module_name_cannot_be_a_keyword() {
        let mut p = params(1.0);
        p.module_name = "module".into();
        let model = assemble(&[], &p);
        assert_eq!(model.module_name, "module_1");
    }

    #[test]
    fn keyword_labels_become_legal_ports() {
        let mut p = params(1.0);
        p.module_name = "module".into();
        let model = assemble(
            &[
                signal("for", "01", SignalMode::OneShot),
                signal("I", "10", SignalMode::OneShot),
                signal("ground", "11", SignalMode::OneShot),
            ],
            &p,
        );
        assert_eq!(
            model.ports().collect::<Vec<_>>(),
            vec!["for_1", "I_1", "ground_1"]
        );
        let text = model.to_verilog_a();
        assert!(text.contains("module module_1(for_1, I_1, ground_1);"));
        assert!(text.contains("output for_1, I_1, ground_1;"));
    }

    #[test]
    fn port_cannot_reuse_module_name() {
        let model = assemble(&[signal("pwl_waves", "01", SignalMode::OneShot)], &params(1.0));
        assert_eq!(model.module_name, "pwl_waves");
        assert_eq!(model.signals[0].port, "pwl_waves_1");
    }

    #[test]
    fn compile_rejects_bad_params_before_emitting() {
        let err = compile(
            &[signal("a", "01", SignalMode::OneShot)],
            &ExportParams::new("nope"),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::InvalidTimeFormat(_)));
    }
}
