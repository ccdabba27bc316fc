//! Local-mode session state: a JSON array of canonical todo records.
//!
//! The file is owned by the CLI shell, not the core — remote mode never
//! touches it. A missing file is an empty collection so `tt add` works in a
//! fresh directory without an init step.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::todo::TodoRecord;

/// Error type for session-file I/O
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize todo state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load the session's collection. Missing file = empty collection.
pub fn load_todos(path: &Path) -> Result<Vec<TodoRecord>, StateError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(|e| StateError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| StateError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the collection back atomically: serialize into a temp file next to
/// the target, then rename over it.
pub fn save_todos(path: &Path, todos: &[TodoRecord]) -> Result<(), StateError> {
    let text = serde_json::to_string_pretty(todos)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let write_err = |e: std::io::Error| StateError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(text.as_bytes()).map_err(write_err)?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
