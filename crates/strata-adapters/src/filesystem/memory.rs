//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StrataResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle and give another to
/// the service under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    dir_calls: usize,
    write_calls: usize,
    read_only: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filesystem that rejects every mutation with a filesystem error.
    pub fn read_only() -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            inner.read_only = true;
        }
        fs
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted by path.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of `create_dir_all` and `write_file` calls, successful or not.
    pub fn mutation_count(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.dir_calls + inner.write_calls)
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.dir_calls += 1;

        if inner.read_only {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only filesystem".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.write_calls += 1;

        if inner.read_only {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only filesystem".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("root/domain/order/entity")).unwrap();

        assert!(fs.exists(Path::new("root")));
        assert!(fs.exists(Path::new("root/domain/order")));
        assert_eq!(fs.list_directories().len(), 4);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("root/Order.java"), "x").is_err());

        fs.create_dir_all(Path::new("root")).unwrap();
        fs.write_file(Path::new("root/Order.java"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("root/Order.java")).as_deref(), Some("x"));
    }

    #[test]
    fn read_only_rejects_mutations_but_counts_them() {
        let fs = MemoryFilesystem::read_only();
        assert!(fs.create_dir_all(Path::new("root")).is_err());
        assert_eq!(fs.mutation_count(), 1);
        assert!(fs.list_directories().is_empty());
    }
}
