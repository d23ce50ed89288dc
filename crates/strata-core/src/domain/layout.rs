//! The directory skeleton of a blank layered project.

use crate::domain::{common::RelativePath, error::DomainError};

/// Directories created by `init`, parents before children.
pub const BOOTSTRAP_DIRECTORIES: &[&[&str]] = &[
    &["application"],
    &["domain"],
    &["infrastructure"],
    &["infrastructure", "config"],
    &["infrastructure", "config", "security"],
    &["infrastructure", "config", "app"],
    &["infrastructure", "config", "jwt"],
    &["infrastructure", "config", "oauth"],
    &["infrastructure", "repositories"],
    &["presentation"],
    &["presentation", "web"],
];

/// The bootstrap skeleton as validated relative paths.
pub fn bootstrap_layout() -> Result<Vec<RelativePath>, DomainError> {
    BOOTSTRAP_DIRECTORIES
        .iter()
        .map(|segments| RelativePath::from_segments(segments.iter()))
        .collect()
}
