//! Locating the project directory.

use std::path::{Path, PathBuf};

use pwlgen_config::CONFIG_FILE;

use crate::GlobalArgs;

/// Returns the nearest directory at or above `start` that holds a `pwlgen.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            format!(
                "no {CONFIG_FILE} in {} or any parent directory (run `pwlgen init` to create one)",
                start.display()
            )
            .into()
        })
}

/// Resolves the project directory from `--config`, or by searching upward
/// from the current directory.
///
/// `--config` may name a project directory or its `pwlgen.toml`. A file with
/// any other name is rejected, since the project file is always read as
/// `<dir>/pwlgen.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let Some(ref config) = global.config else {
        return find_project_root(&std::env::current_dir()?);
    };

    let path = Path::new(config);
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }
    if !path.exists() {
        return Err(format!("--config path '{config}' does not exist").into());
    }
    if path.file_name().and_then(|n| n.to_str()) != Some(CONFIG_FILE) {
        return Err(format!("--config file must be named {CONFIG_FILE}, got '{config}'").into());
    }
    Ok(path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf))
}
