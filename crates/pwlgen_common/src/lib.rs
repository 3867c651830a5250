//! Shared foundational types for the pwlgen waveform-to-Verilog-A toolchain.
//!
//! This crate provides binary levels, fixed-length waveforms, labeled signals,
//! pulse extraction, engineering-unit time parsing, identifier sanitization,
//! and the plain-text pulse report.

#![warn(missing_docs)]

pub mod ident;
pub mod level;
pub mod pulse;
pub mod report;
pub mod signal;
pub mod time;
pub mod waveform;

pub use ident::{sanitize_identifier, IdentAllocator};
pub use level::Level;
pub use pulse::{find_high_pulses, Pulse};
pub use report::PulseReport;
pub use signal::{Signal, SignalMode};
pub use time::{ParseTimeError, TimeQuantity, TimeUnit};
pub use waveform::{ParseWaveformError, Waveform};
