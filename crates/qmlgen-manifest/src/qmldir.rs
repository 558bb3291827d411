//! `qmldir` registration-file emitter
//!
//! The registration file is a two-line naming-convention echo pointing the
//! QML engine at the generated manifest. It carries no class data.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::EmitError;

/// Write a `qmldir` file into `output_dir` for `module_name`.
///
/// Returns the path of the written file.
pub fn write_qmldir(output_dir: &Path, module_name: &str) -> Result<PathBuf, EmitError> {
    let path = output_dir.join("qmldir");
    let content = format!("module {module_name}\ntypeinfo {module_name}.qmltypes\n");

    debug!("Writing qmldir file to: {:?}", path);
    fs::write(&path, content)?;
    Ok(path)
}
