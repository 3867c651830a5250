//! All-or-nothing output of rendered modules.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::ExportError;
use crate::model::CompiledModel;

/// Renders `model` and writes it to `path`.
///
/// The text goes to a temporary file in the destination directory, which is
/// renamed over `path` only once fully written. A failure leaves `path`
/// untouched.
pub fn write_model(path: &Path, model: &CompiledModel) -> Result<(), ExportError> {
    let text = model.to_verilog_a();
    let fail = |source| ExportError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    tmp.write_all(text.as_bytes()).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;

    info!(
        path = %path.display(),
        signals = model.signals.len(),
        bytes = text.len(),
        "wrote Verilog-A model"
    );
    Ok(())
}
