use crate::error::{EvalError, Result};
use crate::types::methodology::Methodology;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DOCUMENT_EXTENSION: &str = "json";

/// `root` itself when it is a file, otherwise every `.json` file beneath it
/// in path order.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(EvalError::PathNotFound(root.display().to_string()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut paths = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .is_some_and(|extension| extension == DOCUMENT_EXTENSION)
        })
        .collect::<Vec<_>>();
    paths.sort();
    tracing::debug!(root = %root.display(), count = paths.len(), "documents discovered");
    Ok(paths)
}

pub fn load(path: &Path) -> Result<Methodology> {
    if !path.exists() {
        return Err(EvalError::PathNotFound(path.display().to_string()));
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|e| EvalError::InvalidDocument(format!("{}: {}", path.display(), e)))
}

/// Loads every document under `root`. A single file must parse; during a
/// directory walk, files that are not methodology documents are logged and
/// skipped.
pub fn load_all(root: &Path) -> Result<Vec<(PathBuf, Methodology)>> {
    if root.is_file() {
        let methodology = load(root)?;
        return Ok(vec![(root.to_path_buf(), methodology)]);
    }

    let mut loaded = Vec::new();
    for path in discover(root)? {
        match load(&path) {
            Ok(methodology) => loaded.push((path, methodology)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable methodology document");
            }
        }
    }
    Ok(loaded)
}

pub fn to_pretty_json(methodology: &Methodology) -> Result<String> {
    Ok(serde_json::to_string_pretty(methodology)?)
}

pub fn write(path: &Path, methodology: &Methodology) -> Result<()> {
    let mut json = to_pretty_json(methodology)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
