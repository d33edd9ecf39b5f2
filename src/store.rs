// src/store.rs
//! Storage plumbing shared by the history and points stores.

use crate::error::{Result, SenseiError};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the directory holding the store files, creating it if needed.
/// An explicit override wins; otherwise the per-user data directory.
pub fn data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => dirs::data_dir()
            .ok_or_else(|| SenseiError::Store("no user data directory on this platform".into()))?
            .join("sensei"),
    };
    fs::create_dir_all(&dir).map_err(|e| SenseiError::io(e, &dir))?;
    Ok(dir)
}

/// Writes via temp file + rename so a reader never observes a partial file.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp = path.with_extension("json.tmp");
    fs::write(&temp, content).map_err(|e| SenseiError::io(e, &temp))?;
    fs::rename(&temp, path).map_err(|e| SenseiError::io(e, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn data_dir_override_is_created() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("store");
        let resolved = data_dir(Some(target.as_path())).unwrap();
        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn atomic_write_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.json");
        atomic_write(&path, "[1]").unwrap();
        atomic_write(&path, "[1,2]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1,2]");
    }
}
