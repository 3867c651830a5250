//! Waveform-to-Verilog-A compiler.
//!
//! Turns a collection of labeled binary waveforms into one Verilog-A module
//! whose outputs reproduce the waveforms in continuous time:
//!
//! 1. [`ExportParams::resolve`] validates the clock period, voltage levels and
//!    edge time.
//! 2. [`pwl::reduce`] compresses each waveform to level-change breakpoints.
//! 3. [`oneshot::emit_one_shot`] or [`periodic::emit_periodic`] builds the
//!    level-selection logic for each signal.
//! 4. [`assemble::assemble`] merges everything into a [`CompiledModel`], which
//!    renders to text and can be written atomically with [`write_model`].

#![warn(missing_docs)]

pub mod assemble;
pub mod error;
pub mod model;
pub mod oneshot;
pub mod params;
pub mod periodic;
pub mod probe;
pub mod pwl;
pub mod render;
pub mod writer;

pub use assemble::{assemble, compile};
pub use error::ExportError;
pub use model::{CompiledModel, EmittedSignal, SignalBody};
pub use params::{ExportParams, ResolvedParams};
pub use pwl::{reduce, Breakpoint};
pub use render::format_real;
pub use writer::write_model;
