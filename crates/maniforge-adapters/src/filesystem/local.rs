//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use maniforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ManiforgeResult,
};

/// Production filesystem implementation using `std::fs`.
///
/// Whole-file helpers only, so every handle is closed on all exit paths.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> ManiforgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_read_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ManiforgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_write_error(path, e))
    }
}

fn map_read_error(path: &Path, e: io::Error) -> maniforge_core::error::ManiforgeError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::TemplateNotFound {
            path: path.to_path_buf(),
        },
        _ => ApplicationError::TemplateUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
    .into()
}

// A NotFound on write means the destination directory is missing: the file
// itself not existing is the normal overwrite-or-create case.
fn map_write_error(path: &Path, e: io::Error) -> maniforge_core::error::ManiforgeError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::DirectoryMissing {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => ApplicationError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ApplicationError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maniforge_core::error::ManiforgeError;

    #[test]
    fn write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.yaml");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "key: value\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "key: value\n");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.yaml");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "first\n").unwrap();
        fs.write_file(&path, "second\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn read_missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .read_to_string(&dir.path().join("absent.j2"))
            .unwrap_err();
        match err {
            ManiforgeError::Application(ApplicationError::TemplateNotFound { .. }) => {}
            other => panic!("expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn write_into_missing_directory_maps_to_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .write_file(&dir.path().join("no-such-dir/out.yaml"), "x")
            .unwrap_err();
        match err {
            ManiforgeError::Application(ApplicationError::DirectoryMissing { .. }) => {}
            other => panic!("expected DirectoryMissing, got {other:?}"),
        }
    }
}
