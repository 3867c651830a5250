//! Building the signal collection from a project configuration.

use pwlgen_common::{Level, Signal, SignalMode, Waveform};

use crate::error::ConfigError;
use crate::types::{ProjectConfig, SignalDef, DEFAULT_SIGNAL_COUNT};

/// Builds every signal of the project, in declaration order.
///
/// Each waveform has exactly `project.cycles` samples. Without any
/// `[[signals]]` entries, three all-low one-shot signals named
/// `Signal 1` .. `Signal 3` are created.
pub fn build_signals(config: &ProjectConfig) -> Result<Vec<Signal>, ConfigError> {
    let cycles = config.project.cycles;
    if config.signals.is_empty() {
        return Ok((1..=DEFAULT_SIGNAL_COUNT)
            .map(|i| Signal::new(format!("Signal {i}"), Waveform::new(cycles), SignalMode::OneShot))
            .collect());
    }

    config
        .signals
        .iter()
        .enumerate()
        .map(|(i, def)| build_signal(i, def, cycles))
        .collect()
}

/// Builds one signal.
///
/// The waveform starts all low, takes `pattern` (padded low to `cycles`),
/// then has each `[start, width]` pulse filled high, clamped at the end. A
/// signal labeled `clk` with neither pattern nor pulses is filled with the
/// clock pattern and defaults to periodic.
fn build_signal(index: usize, def: &SignalDef, cycles: usize) -> Result<Signal, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidSignal {
        signal: if def.name.trim().is_empty() {
            format!("signals[{index}]")
        } else {
            format!("signal '{}'", def.name)
        },
        reason,
    };

    let auto_clock =
        def.pattern.is_none() && def.pulses.is_empty() && Signal::is_clock_label(&def.name);
    if auto_clock {
        let mode = def.mode.unwrap_or(SignalMode::Periodic);
        return Ok(Signal::new(def.name.clone(), Waveform::clock(cycles), mode));
    }

    let mut waveform = Waveform::new(cycles);
    if let Some(pattern) = &def.pattern {
        let parsed = pattern.parse::<Waveform>().map_err(|e| invalid(e.to_string()))?;
        if parsed.len() > cycles {
            return Err(invalid(format!(
                "pattern has {} samples but cycles = {cycles}",
                parsed.len()
            )));
        }
        for (i, level) in parsed.levels().iter().enumerate() {
            waveform.set(i, *level);
        }
    }

    for &(start, width) in &def.pulses {
        if width == 0 {
            return Err(invalid(format!("pulse at {start} has zero width")));
        }
        waveform.fill(start, width, Level::High);
    }

    Ok(Signal::new(
        def.name.clone(),
        waveform,
        def.mode.unwrap_or_default(),
    ))
}
