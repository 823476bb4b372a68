//! Filesystem utilities for whole-file replacement.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace `destination` with `contents` via a sibling temp file and a rename.
///
/// Readers see either the old file or the new one, never a partial write.
/// Missing parent directories are created. `fs::rename` replaces an existing
/// file on every supported platform, so a single rename suffices.
///
/// # Errors
///
/// Returns an error if the parent cannot be created, the temp file cannot be
/// written, or the rename fails. The temp file never outlives a failure.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
        _ => {}
    }

    let pending = PendingFile::create(temp_sibling(destination), contents)?;
    pending.commit(destination)
}

/// A fully written temp file, deleted on drop unless committed.
struct PendingFile {
    path: PathBuf,
    committed: bool,
}

impl PendingFile {
    fn create(path: PathBuf, contents: &[u8]) -> io::Result<Self> {
        let pending = Self {
            path,
            committed: false,
        };
        let mut file = fs::File::create(&pending.path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        Ok(pending)
    }

    fn commit(mut self, destination: &Path) -> io::Result<()> {
        fs::rename(&self.path, destination).map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("Failed to replace {}: {}", destination.display(), err),
            )
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "hap".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_new_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("notes.json");

        write_atomic(&dest, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "{}");
        assert!(!temp_sibling(&dest).exists());
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("notes.json");
        fs::write(&dest, "old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("deeper").join("notes.json");

        write_atomic(&dest, b"{}").unwrap();

        assert!(dest.exists());
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("notes.json");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("occupied"), "x").unwrap();

        let err = write_atomic(&dest, b"{}").unwrap_err();

        assert!(err.to_string().contains("Failed to replace"));
        assert!(dest.is_dir());
        assert!(!temp_sibling(&dest).exists());
    }
}
