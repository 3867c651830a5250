//! Export parameters: raw user input and its validated form.

use pwlgen_common::TimeQuantity;

use crate::error::ExportError;

/// Default low level, in volts.
pub const DEFAULT_VLOW: &str = "0";
/// Default high level, in volts.
pub const DEFAULT_VHIGH: &str = "1.2";
/// Default rise/fall time.
pub const DEFAULT_EDGE_TIME: &str = "10ps";
/// Default name of the emitted module.
pub const DEFAULT_MODULE_NAME: &str = "pwl_waves";

/// Export parameters as typed by a user or read from a project file.
///
/// Nothing is validated until [`ExportParams::resolve`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportParams {
    /// One nominal clock cycle (two sample indices), e.g. `"10ns"`.
    pub clock_period: String,
    /// Voltage for a low sample.
    pub vlow: String,
    /// Voltage for a high sample.
    pub vhigh: String,
    /// Rise/fall time applied by the transition filter.
    pub edge_time: String,
    /// Name of the emitted module.
    pub module_name: String,
}

impl ExportParams {
    /// Creates parameters with the given clock period and default levels,
    /// edge time and module name.
    pub fn new(clock_period: impl Into<String>) -> Self {
        Self {
            clock_period: clock_period.into(),
            vlow: DEFAULT_VLOW.to_string(),
            vhigh: DEFAULT_VHIGH.to_string(),
            edge_time: DEFAULT_EDGE_TIME.to_string(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }

    /// Parses and validates every field.
    ///
    /// Fields are checked in the order clock period, voltages, edge time; the
    /// first failure is returned.
    pub fn resolve(&self) -> Result<ResolvedParams, ExportError> {
        let clock_period: TimeQuantity = self.clock_period.parse()?;
        if clock_period.seconds() <= 0.0 {
            return Err(ExportError::NonPositiveClockPeriod {
                input: self.clock_period.clone(),
            });
        }

        let vlow = parse_voltage("vlow", &self.vlow)?;
        let vhigh = parse_voltage("vhigh", &self.vhigh)?;

        let edge_time: TimeQuantity = self.edge_time.parse()?;
        if edge_time.seconds() < 0.0 {
            return Err(ExportError::NegativeEdgeTime {
                input: self.edge_time.clone(),
            });
        }

        Ok(ResolvedParams {
            clock_period,
            quantum: clock_period.seconds() / 2.0,
            vlow,
            vhigh,
            edge_time: edge_time.seconds(),
            module_name: self.module_name.clone(),
        })
    }
}

/// Validated export parameters in base units.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParams {
    /// The clock period as parsed.
    pub clock_period: TimeQuantity,
    /// Seconds per sample index (half the clock period).
    pub quantum: f64,
    /// Low level in volts.
    pub vlow: f64,
    /// High level in volts.
    pub vhigh: f64,
    /// Transition rise/fall time in seconds.
    pub edge_time: f64,
    /// Requested module name, not yet sanitized.
    pub module_name: String,
}

/// Parses a voltage level. Ordering between low and high is not enforced.
pub fn parse_voltage(field: &'static str, input: &str) -> Result<f64, ExportError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ExportError::InvalidVoltageValue {
            field,
            input: input.to_string(),
        })
}
