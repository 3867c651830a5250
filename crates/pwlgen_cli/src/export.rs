//! `pwlgen export`: compile the project's signals into a Verilog-A file.

use std::fs;
use std::path::{Path, PathBuf};

use pwlgen_config::{build_signals, load_config, ProjectConfig};
use pwlgen_va::{compile, write_model, ExportParams};
use tracing::debug;

use crate::project::resolve_project_root;
use crate::{ExportArgs, GlobalArgs};

/// Runs the `pwlgen export` command.
///
/// Loads the project, applies command-line overrides, compiles the module,
/// and only then creates the output directory and writes the file. Returns
/// exit code 0 on success.
pub fn run(args: &ExportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let root = resolve_project_root(global)?;
    let config = load_config(&root)?;
    let signals = build_signals(&config)?;
    let params = export_params(&config, args)?;

    if !global.quiet {
        eprintln!(
            "   Exporting {} ({} signals, clock {})",
            params.module_name,
            signals.len(),
            params.clock_period
        );
    }
    let model = compile(&signals, &params)?;
    let output = output_path(&root, &config, args, &model.module_name);
    debug!(root = %root.display(), output = %output.display(), ?params, "export settings");

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_model(&output, &model)?;
    if !global.quiet {
        eprintln!(
            "     Wrote {} ({} ports)",
            output.display(),
            model.signals.len()
        );
    }

    Ok(0)
}

/// Merges the project's `[export]` table with command-line overrides.
fn export_params(
    config: &ProjectConfig,
    args: &ExportArgs,
) -> Result<ExportParams, Box<dyn std::error::Error>> {
    let clock_period = args
        .clock_period
        .clone()
        .or_else(|| config.export.clock_period.clone())
        .ok_or("no clock period: set [export].clock_period or pass --clock-period")?;

    let pick = |flag: &Option<String>, value: &str| flag.clone().unwrap_or_else(|| value.to_string());

    Ok(ExportParams {
        clock_period,
        vlow: pick(&args.vlow, &config.export.vlow),
        vhigh: pick(&args.vhigh, &config.export.vhigh),
        edge_time: pick(&args.edge_time, &config.export.edge_time),
        module_name: pick(&args.module, &config.project.name),
    })
}

/// Picks the output file: `--output` as given, else `[export].output` under
/// the project, else `out/<module>.va` under the project. `module` is the
/// compiled module name, already a legal identifier.
fn output_path(root: &Path, config: &ProjectConfig, args: &ExportArgs, module: &str) -> PathBuf {
    if let Some(ref out) = args.output {
        return PathBuf::from(out);
    }
    match config.export.output {
        Some(ref out) => root.join(out),
        None => root
            .join("out")
            .join(format!("{module}.va")),
    }
}
