//! Core domain layer for Strata.
//!
//! Pure naming and placement logic.  No filesystem, no templates, no
//! process state: every function here is deterministic in its inputs.
//!
//! - [`naming`]: case transformations
//! - [`value_objects`]: artifact kinds, command/query branch, validated names
//! - [`resolver`]: `(kind, name)` -> directory + file name + template
//! - [`layout`]: the bootstrap directory skeleton
pub mod common;
pub mod error;
pub mod layout;
pub mod naming;
pub mod resolver;
pub mod value_objects;

pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use layout::{BOOTSTRAP_DIRECTORIES, bootstrap_layout};
pub use resolver::{
    GenerationPlan, NameSegments, PathResolver, PlacementRule, ResolvedTarget, SOURCE_EXTENSION,
};
pub use value_objects::{ArtifactKind, ArtifactName, Branch, TemplateKind};
