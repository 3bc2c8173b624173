//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use maniforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ManiforgeError, ManiforgeResult},
};

/// In-memory filesystem for testing.
///
/// Behaves like the local adapter for the error cases the orchestrator
/// cares about: writing into a missing directory fails with
/// `DirectoryMissing`, and paths marked via [`MemoryFilesystem::deny`]
/// fail with `PermissionDenied`.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register a directory (and its ancestors).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.into().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file without going through the port.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.into(), content.into());
    }

    /// Mark a path so writes to it fail with `PermissionDenied`.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        inner.denied.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error() -> ManiforgeError {
    ManiforgeError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> ManiforgeResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ManiforgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        if inner.denied.contains(path) {
            return Err(ApplicationError::PermissionDenied {
                path: path.to_path_buf(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::DirectoryMissing {
                    path: path.to_path_buf(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
