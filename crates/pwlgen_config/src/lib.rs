//! Parsing and validation of `pwlgen.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a strongly-typed
//! [`ProjectConfig`], plus the [`Signal`](pwlgen_common::Signal) collection it
//! describes.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod signals;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE};
pub use signals::build_signals;
pub use types::*;
