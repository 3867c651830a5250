//! pwlgen CLI: the command-line interface for the waveform compiler.
//!
//! Provides `pwlgen init` for project scaffolding, `pwlgen export` for writing
//! the Verilog-A model described by `pwlgen.toml`, and `pwlgen pulses` for
//! printing the high pulses of each signal.

#![warn(missing_docs)]

mod export;
mod init;
mod project;
mod pulses;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// pwlgen: compile digital waveforms into analog stimulus models.
#[derive(Parser, Debug)]
#[command(name = "pwlgen", version, about = "Waveform to Verilog-A compiler")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `pwlgen.toml` file or its project directory.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new pwlgen project.
    Init {
        /// Project name (creates a subdirectory). If omitted, initializes in
        /// the current directory.
        name: Option<String>,
    },
    /// Compile the project's signals into a Verilog-A module.
    Export(ExportArgs),
    /// Print the high pulses of each signal.
    Pulses(PulsesArgs),
}

/// Arguments for the `pwlgen export` subcommand.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output path for the Verilog-A file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Clock period (e.g., "10ns", "1.5us").
    #[arg(long)]
    pub clock_period: Option<String>,

    /// Low level in volts.
    #[arg(long, allow_hyphen_values = true)]
    pub vlow: Option<String>,

    /// High level in volts.
    #[arg(long, allow_hyphen_values = true)]
    pub vhigh: Option<String>,

    /// Rise/fall time of every output (e.g., "10ps").
    #[arg(long)]
    pub edge_time: Option<String>,

    /// Name of the emitted module (default: project name).
    #[arg(long)]
    pub module: Option<String>,
}

/// Arguments for the `pwlgen pulses` subcommand.
#[derive(Parser, Debug)]
pub struct PulsesArgs {
    /// Only report the signal with this label.
    #[arg(long)]
    pub signal: Option<String>,

    /// Output format for the report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Pulse report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file or project directory.
    pub config: Option<String>,
}

impl GlobalArgs {
    /// Default log filter for these flags, used when `RUST_LOG` is unset.
    fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };
    init_logging(global.log_level());

    let result = match cli.command {
        Command::Init { name } => init::run(name, &global),
        Command::Export(ref args) => export::run(args, &global),
        Command::Pulses(ref args) => pulses::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
