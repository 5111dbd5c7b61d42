use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::CliError;

pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub fn to_pretty_json<T: Serialize>(what: &'static str, data: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(data).map_err(|source| CliError::Json { what, source })
}

/// Write `data` as pretty JSON to `dir/name`, creating `dir` if needed.
pub fn write_json<T: Serialize>(
    dir: &Path,
    name: &'static str,
    data: &T,
) -> Result<PathBuf, CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(name);
    let json = to_pretty_json(name, data)?;
    std::fs::write(&path, &json).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = json.len(), "wrote");
    Ok(path)
}
