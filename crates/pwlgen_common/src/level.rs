//! Two-state logic levels stored in a waveform sample.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single binary sample value.
///
/// Waveforms only ever hold driven values, so unlike a full IEEE 1164 logic
/// type there is no unknown or high-impedance state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    /// Logic low (0).
    #[default]
    Low = 0,
    /// Logic high (1).
    High = 1,
}

impl Level {
    /// Converts a `'0'` or `'1'` character to a [`Level`].
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Level::Low),
            '1' => Some(Level::High),
            _ => None,
        }
    }

    /// Selects the voltage matching this level.
    pub fn voltage(self, low: f64, high: f64) -> f64 {
        match self {
            Level::Low => low,
            Level::High => high,
        }
    }
}

impl From<bool> for Level {
    fn from(value: bool) -> Self {
        if value {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "0"),
            Level::High => write!(f, "1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Level::*;
    use super::*;

    #[test]
    fn from_char_valid() {
        assert_eq!(Level::from_char('0'), Some(Low));
        assert_eq!(Level::from_char('1'), Some(High));
    }

    #[test]
    fn from_char_invalid() {
        assert_eq!(Level::from_char('x'), None);
        assert_eq!(Level::from_char('2'), None);
    }

    #[test]
    fn voltage_selection() {
        assert_eq!(Low.voltage(0.0, 1.2), 0.0);
        assert_eq!(High.voltage(0.0, 1.2), 1.2);
        // Inverted rails are allowed.
        assert_eq!(High.voltage(3.3, 0.0), 0.0);
    }

    #[test]
    fn display_as_digit() {
        assert_eq!(format!("{Low}{High}"), "01");
    }

    #[test]
    fn default_is_low() {
        assert_eq!(Level::default(), Low);
        assert_eq!(Level::from(true), High);
    }
}
