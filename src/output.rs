use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScrapeError};
use crate::models::ScrapedDocumentation;

/// Replace `path` with `contents`, creating parent directories as needed.
///
/// The bytes land in a sibling temporary file first and are renamed over the
/// target, so the previous file stays intact if writing fails.
pub fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let staging = staging_path(path);
    fs::write(&staging, contents).map_err(write_error)?;
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(write_error(source));
    }

    Ok(())
}

pub fn encode_snapshot(documentation: &ScrapedDocumentation) -> Result<String> {
    Ok(serde_json::to_string_pretty(documentation)?)
}

pub fn read_snapshot(path: &Path) -> Result<ScrapedDocumentation> {
    let raw = fs::read_to_string(path).map_err(|source| ScrapeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}
