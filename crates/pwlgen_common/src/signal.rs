//! Labeled waveforms with a playback mode.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::waveform::Waveform;

/// How an exported signal behaves after its captured window.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalMode {
    /// Play the waveform once, then hold the low level.
    #[default]
    OneShot,
    /// Repeat the waveform forever with period `len * quantum`.
    Periodic,
}

impl fmt::Display for SignalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalMode::OneShot => write!(f, "one-shot"),
            SignalMode::Periodic => write!(f, "periodic"),
        }
    }
}

/// A waveform together with its user label and playback mode.
///
/// The label is free text: it may be empty, duplicated, or contain
/// characters that are not legal in an identifier.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Signal {
    /// User-supplied label.
    pub label: String,
    /// The sampled levels.
    pub waveform: Waveform,
    /// Playback mode.
    pub mode: SignalMode,
}

impl Signal {
    /// Creates a signal.
    pub fn new(label: impl Into<String>, waveform: Waveform, mode: SignalMode) -> Self {
        Self {
            label: label.into(),
            waveform,
            mode,
        }
    }

    /// Returns whether the label names a clock (`clk`, any case).
    pub fn is_clock_label(label: &str) -> bool {
        label.trim().eq_ignore_ascii_case("clk")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_display_and_default() {
        assert_eq!(SignalMode::default(), SignalMode::OneShot);
        assert_eq!(SignalMode::OneShot.to_string(), "one-shot");
        assert_eq!(SignalMode::Periodic.to_string(), "periodic");
    }

    #[test]
    fn mode_serde_names() {
        let json = serde_json::to_string(&SignalMode::OneShot).unwrap();
        assert_eq!(json, "\"one-shot\"");
        let back: SignalMode = serde_json::from_str("\"periodic\"").unwrap();
        assert_eq!(back, SignalMode::Periodic);
    }

    #[test]
    fn clock_label_detection() {
        assert!(Signal::is_clock_label("CLK"));
        assert!(Signal::is_clock_label("  clk "));
        assert!(!Signal::is_clock_label("clk2"));
    }
}
