//! Writing exported files

use crate::config::{ConfigError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write `contents` to `path`.
///
/// Existing files are only replaced when `overwrite` is set. The data goes
/// to a sibling temporary file first and is renamed into place, so readers
/// never observe a half-written file.
pub fn write_to(path: &Path, contents: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(ConfigError::AlreadyExists(path.display().to_string()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "brewenv".to_string());
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&tmp, contents)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
