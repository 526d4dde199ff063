use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Make the output path absolute without requiring it to exist.
///
/// When the parent directory already exists it is canonicalized, so the result
/// can be compared against paths found while walking a canonical source root.
pub fn resolve_output(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let (Some(parent), Some(file_name)) = (absolute.parent(), absolute.file_name()) else {
        return Ok(absolute);
    };

    match fs::canonicalize(parent) {
        Ok(parent) => Ok(parent.join(file_name)),
        Err(_) => Ok(absolute),
    }
}

/// Ensure the parent directory of `path` exists, creating it if necessary
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|err| Error::output(parent, err))?;
    }
    Ok(())
}

/// Remove a file left over from a previous run; a missing file is not an error
pub fn remove_existing(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(Error::output(path, err)),
    }
}

/// Archive entry name for `path` relative to `root`, always `/`-separated
pub fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        Error::custom(format!(
            "{} is not inside {}",
            path.display(),
            root.display()
        ))
    })?;

    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}

/// Format a byte count for display
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
