//! File reading and atomic replacement shared by the checklist and catalog tools.
//!
//! Writes never touch the destination until the new contents are fully on
//! disk: data goes to a temporary file in the destination's directory, which
//! is then renamed over the destination. The temporary file is removed on
//! every failure path.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FileError::NotFound(path.to_path_buf())
        } else {
            FileError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    fn write(path: &Path, source: io::Error) -> Self {
        FileError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a UTF-8 text file, distinguishing a missing file from other failures
pub fn read_to_string(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|e| FileError::read(path, e))
}

/// Open a file for reading, distinguishing a missing file from other failures
pub fn open(path: &Path) -> Result<File, FileError> {
    File::open(path).map_err(|e| FileError::read(path, e))
}

/// Directory the temporary file is created in (same filesystem as the target)
fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Replace `path` with `contents` via a temporary file and rename
///
/// An existing file keeps its permissions. If anything fails, the temporary
/// file is deleted and the original is left as it was.
pub fn replace_atomically(path: &Path, contents: &[u8]) -> Result<(), FileError> {
    let mut temp =
        NamedTempFile::new_in(staging_dir(path)).map_err(|e| FileError::write(path, e))?;

    temp.write_all(contents)
        .and_then(|()| temp.flush())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| FileError::write(path, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| FileError::write(path, e))?;
    }

    // A failed persist hands the guard back inside the error; dropping it
    // removes the temporary file.
    temp.persist(path).map_err(|e| FileError::write(path, e.error))?;

    tracing::debug!("Replaced {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("absent.md");

        let err = read_to_string(&path).unwrap_err();
        assert!(matches!(err, FileError::NotFound(p) if p == path));
    }

    #[test]
    fn test_replace_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("list.md");
        fs::write(&path, "old").unwrap();

        replace_atomically(&path, b"new contents").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
        // Only the target remains, no stray temporary file
        assert_eq!(entries(temp_dir.path()), vec![path]);
    }

    #[test]
    fn test_replace_creates_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out.json");

        replace_atomically(&path, b"[]").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_replace_into_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("out.json");

        let err = replace_atomically(&path, b"[]").unwrap_err();
        assert!(matches!(err, FileError::Write { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_replace_onto_directory_leaves_no_temp_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "x").unwrap();

        // Renaming a file over a non-empty directory fails
        let err = replace_atomically(&target, b"data").unwrap_err();
        assert!(matches!(err, FileError::Write { .. }));
        assert!(target.is_dir());
        assert_eq!(entries(temp_dir.path()), vec![target]);
    }

    #[test]
    fn test_staging_dir_for_bare_file_name() {
        assert_eq!(staging_dir(Path::new("weapons.json")), Path::new("."));
        assert_eq!(staging_dir(Path::new("data/weapons.json")), Path::new("data"));
    }
}
