//! Fixed-length clock-indexed binary waveforms and their editing operations.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::level::Level;
use crate::pulse::{find_high_pulses, Pulse};

/// An ordered sequence of binary samples, one per clock index.
///
/// The length is fixed at construction; every editing operation keeps it.
/// All waveforms exported into one model share the same length (the
/// configured cycle count).
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Waveform {
    samples: Vec<Level>,
}

impl Waveform {
    /// Creates an all-low waveform with `len` samples.
    pub fn new(len: usize) -> Self {
        Self {
            samples: vec![Level::Low; len],
        }
    }

    /// Creates a clock pattern `0, 1, 0, 1, ...` of `len` samples.
    pub fn clock(len: usize) -> Self {
        Self::from_levels((0..len).map(|i| Level::from(i % 2 == 1)).collect())
    }

    /// Wraps an existing sample vector.
    pub fn from_levels(samples: Vec<Level>) -> Self {
        Self { samples }
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether the waveform has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns all samples in index order.
    pub fn levels(&self) -> &[Level] {
        &self.samples
    }

    /// Sets one sample. Out-of-range indices are ignored and return `false`.
    pub fn set(&mut self, index: usize, level: Level) -> bool {
        match self.samples.get_mut(index) {
            Some(slot) => {
                *slot = level;
                true
            }
            None => false,
        }
    }

    /// Writes `level` to `len` samples starting at `start`, clamped to the end.
    ///
    /// Returns the range actually written, which is empty when `len` is zero
    /// or `start` is past the end.
    pub fn fill(&mut self, start: usize, len: usize, level: Level) -> Range<usize> {
        let start = start.min(self.samples.len());
        let end = start.saturating_add(len).min(self.samples.len());
        for slot in &mut self.samples[start..end] {
            *slot = level;
        }
        start..end
    }

    /// Returns the high pulses of this waveform.
    pub fn pulses(&self) -> Vec<Pulse> {
        find_high_pulses(&self.samples)
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in &self.samples {
            write!(f, "{level}")?;
        }
        Ok(())
    }
}

/// Error returned when a waveform pattern string contains a character other
/// than `0`, `1`, `_` or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid waveform character '{ch}' at position {position}")]
pub struct ParseWaveformError {
    /// The offending character.
    pub ch: char,
    /// Character offset within the input string.
    pub position: usize,
}

impl FromStr for Waveform {
    type Err = ParseWaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut samples = Vec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            if ch == '_' || ch.is_whitespace() {
                continue;
            }
            let level = Level::from_char(ch).ok_or(ParseWaveformError { ch, position })?;
            samples.push(level);
        }
        Ok(Self::from_levels(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level::{High as H, Low as L};

    #[test]
    fn new_is_all_low() {
        let w = Waveform::new(4);
        assert_eq!(w.levels(), &[L, L, L, L]);
        assert!(w.pulses().is_empty());
    }

    #[test]
    fn clock_starts_low() {
        let w = Waveform::clock(6);
        assert_eq!(w.to_string(), "010101");
        assert_eq!(w.pulses().len(), 3);
    }

    #[test]
    fn set_in_and_out_of_range() {
        let mut w = Waveform::new(3);
        assert!(w.set(1, H));
        assert!(!w.set(3, H));
        assert_eq!(w.to_string(), "010");
    }

    #[test]
    fn fill_is_clamped() {
        let mut w = Waveform::new(8);
        assert_eq!(w.fill(6, 10, H), 6..8);
        assert_eq!(w.to_string(), "00000011");
        assert_eq!(w.fill(2, 2, H), 2..4);
        assert_eq!(w.to_string(), "00110011");
    }

    #[test]
    fn fill_noop_cases() {
        let mut w = Waveform::new(4);
        assert!(w.fill(1, 0, H).is_empty());
        assert!(w.fill(9, 3, H).is_empty());
        assert_eq!(w, Waveform::new(4));
    }

    #[test]
    fn parse_with_separators() {
        let w: Waveform = "0011_1000".parse().unwrap();
        assert_eq!(w.len(), 8);
        assert_eq!(w.levels()[2], H);
        let spaced: Waveform = " 01 10 ".parse().unwrap();
        assert_eq!(spaced.to_string(), "0110");
    }

    #[test]
    fn parse_invalid_char() {
        let err = "01x0".parse::<Waveform>().unwrap_err();
        assert_eq!(err, ParseWaveformError { ch: 'x', position: 2 });
        assert_eq!(
            err.to_string(),
            "invalid waveform character 'x' at position 2"
        );
    }

    #[test]
    fn parse_empty() {
        let w: Waveform = "".parse().unwrap();
        assert!(w.is_empty());
    }
}
