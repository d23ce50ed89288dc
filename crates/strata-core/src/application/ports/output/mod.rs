//! Driven (output) ports - implemented by infrastructure.
//!
//! The `strata-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TemplateKind;
use crate::error::StrataResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents.  Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Create or overwrite a file.  Not atomic; prior content is not kept.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the template catalog.
///
/// Implemented by `strata_adapters::renderer::SpringTemplates`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `name` (the normalized artifact name).
    fn render(&self, template: TemplateKind, name: &str) -> StrataResult<String>;
}
