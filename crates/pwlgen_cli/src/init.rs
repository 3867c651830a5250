//! `pwlgen init`: project scaffolding command.
//!
//! Creates a project directory holding a template `pwlgen.toml` with a clock
//! and one example signal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pwlgen_config::CONFIG_FILE;
use pwlgen_va::params::DEFAULT_MODULE_NAME;

use crate::GlobalArgs;

/// Runs the `pwlgen init` command.
///
/// If `name` is `Some`, creates (or reuses) a subdirectory with that name.
/// Otherwise initializes in the current working directory. An existing
/// `pwlgen.toml` is never overwritten. Returns exit code 0 on success.
pub fn run(name: Option<String>, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = match &name {
        Some(n) => PathBuf::from(n),
        None => std::env::current_dir()?,
    };

    let config_path = project_dir.join(CONFIG_FILE);
    if config_path.exists() {
        return Err(format!("'{}' already exists", config_path.display()).into());
    }
    fs::create_dir_all(&project_dir)?;

    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_MODULE_NAME);

    if !global.quiet {
        eprintln!("  Creating new pwlgen project `{project_name}`");
    }
    write_pwlgen_toml(&project_dir, project_name)?;
    if !global.quiet {
        eprintln!("     Created {}", config_path.display());
    }

    Ok(0)
}

/// Writes the template `pwlgen.toml`.
fn write_pwlgen_toml(root: &Path, name: &str) -> io::Result<()> {
    let content = format!(
        r#"[project]
name = "{name}"
cycles = 32

[export]
clock_period = "10ns"
vlow = 0
vhigh = 1.2
edge_time = "10ps"

# A signal named "clk" with no pattern or pulses is filled with 0101...
[[signals]]
name = "CLK"

[[signals]]
name = "EN"
mode = "one-shot"
pulses = [[2, 4]]
"#
    );
    fs::write(root.join(CONFIG_FILE), content)
}
