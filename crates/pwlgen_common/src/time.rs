//! Time quantities with engineering-unit parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Engineering scale of a [`TimeQuantity`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TimeUnit {
    /// 1e-15 s.
    Femto,
    /// 1e-12 s.
    Pico,
    /// 1e-9 s.
    Nano,
    /// 1e-6 s.
    Micro,
    /// 1e-3 s.
    Milli,
    /// Plain seconds.
    Second,
}

impl TimeUnit {
    /// Seconds per one unit.
    pub fn scale(self) -> f64 {
        match self {
            TimeUnit::Femto => 1e-15,
            TimeUnit::Pico => 1e-12,
            TimeUnit::Nano => 1e-9,
            TimeUnit::Micro => 1e-6,
            TimeUnit::Milli => 1e-3,
            TimeUnit::Second => 1.0,
        }
    }

    /// Canonical suffix used for display.
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Femto => "fs",
            TimeUnit::Pico => "ps",
            TimeUnit::Nano => "ns",
            TimeUnit::Micro => "us",
            TimeUnit::Milli => "ms",
            TimeUnit::Second => "s",
        }
    }
}

/// Recognized suffixes, longest first so `ms` is never read as `m` + `s`.
const SUFFIXES: &[(&str, TimeUnit)] = &[
    ("fs", TimeUnit::Femto),
    ("ps", TimeUnit::Pico),
    ("ns", TimeUnit::Nano),
    ("us", TimeUnit::Micro),
    ("ms", TimeUnit::Milli),
    ("f", TimeUnit::Femto),
    ("p", TimeUnit::Pico),
    ("n", TimeUnit::Nano),
    ("u", TimeUnit::Micro),
    ("m", TimeUnit::Milli),
    ("s", TimeUnit::Second),
];

/// A time value together with the unit it was written in.
///
/// Supports parsing from strings like "10ns", "1.5us", "5ms", "1e-9" (bare
/// numbers are seconds). Matching is case-insensitive and ignores
/// surrounding whitespace.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeQuantity {
    value: f64,
    unit: TimeUnit,
}

impl TimeQuantity {
    /// Creates a quantity of `value` in `unit`.
    pub fn new(value: f64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity in plain seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        Self::new(seconds, TimeUnit::Second)
    }

    /// The unit the value was written in.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// The value normalized to seconds.
    pub fn seconds(&self) -> f64 {
        self.value * self.unit.scale()
    }
}

impl fmt::Debug for TimeQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeQuantity({self})")
    }
}

impl fmt::Display for TimeQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Error type for parsing time strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time format: '{}'", self.input)
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for TimeQuantity {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError {
            input: s.to_string(),
        };

        let lower = s.trim().to_ascii_lowercase();
        let (number, unit) = SUFFIXES
            .iter()
            .find_map(|&(suffix, unit)| lower.strip_suffix(suffix).map(|num| (num, unit)))
            // No suffix: bare seconds
            .unwrap_or((lower.as_str(), TimeUnit::Second));

        let value: f64 = number.trim().parse().map_err(|_| err())?;
        if !value.is_finite() {
            return Err(err());
        }
        Ok(TimeQuantity { value, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: &str) -> f64 {
        s.parse::<TimeQuantity>().unwrap().seconds()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= b.abs() * 1e-12
    }

    #[test]
    fn parse_nanoseconds() {
        assert!(close(secs("10ns"), 1e-8));
    }

    #[test]
    fn parse_fractional_microseconds() {
        assert!(close(secs("1.5us"), 1.5e-6));
    }

    #[test]
    fn parse_bare_scientific() {
        let t: TimeQuantity = "1e-9".parse().unwrap();
        assert_eq!(t.unit(), TimeUnit::Second);
        assert_eq!(t.seconds(), 1e-9);
    }

    #[test]
    fn parse_milliseconds_not_meters_plus_s() {
        let t: TimeQuantity = "5ms".parse().unwrap();
        assert_eq!(t.unit(), TimeUnit::Milli);
        assert!(close(t.seconds(), 5e-3));
    }

    #[test]
    fn parse_single_letter_aliases() {
        assert!(close(secs("3f"), 3e-15));
        assert!(close(secs("3p"), 3e-12));
        assert!(close(secs("3n"), 3e-9));
        assert!(close(secs("3u"), 3e-6));
        assert!(close(secs("3m"), 3e-3));
        assert_eq!(secs("3s"), 3.0);
    }

    #[test]
    fn parse_case_and_whitespace() {
        assert!(close(secs("  10NS "), 1e-8));
        assert!(close(secs("10 ps"), 1e-11));
    }

    #[test]
    fn parse_negative_value() {
        assert!(close(secs("-2ns"), -2e-9));
    }

    #[test]
    fn parse_invalid() {
        let err = "abc".parse::<TimeQuantity>().unwrap_err();
        assert_eq!(err.input, "abc");
        assert_eq!(err.to_string(), "invalid time format: 'abc'");
    }

    #[test]
    fn parse_unit_without_number() {
        assert!("ns".parse::<TimeQuantity>().is_err());
        assert!("".parse::<TimeQuantity>().is_err());
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!("1e400".parse::<TimeQuantity>().is_err());
    }

    #[test]
    fn display_keeps_unit() {
        let t: TimeQuantity = "1.5us".parse().unwrap();
        assert_eq!(t.to_string(), "1.5us");
        assert_eq!(TimeQuantity::from_seconds(2.0).to_string(), "2s");
    }
}
