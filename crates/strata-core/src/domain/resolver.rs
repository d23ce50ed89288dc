//! Path resolution: `(kind, raw name)` -> where the file goes and what it is called.
//!
//! ## Placement rules
//!
//! ```text
//! controller        presentation/web/{raw}/{Name}Controller.java
//! service           application/{command|query}/{lead}/service/{Name}.java
//! facade            application/{command|query}/{lead}/facade/{Name}.java
//! entity            domain/{raw lowercased}/entity/{Name}.java
//! vo                domain/{raw lowercased}/vo/{Name}.java
//! command           presentation/web/{Name}/dto/command/{raw}.java
//! query             presentation/web/{Name}/dto/query/{raw}.java
//! exception-advice  presentation/web/ExceptionAdvice/{raw}.java
//!                   + ApiError.java, ApiErrorType.java
//! ```
//!
//! `{Name}` is the raw name with its first character upper-cased, `{lead}` is
//! the part of the raw name before its first capital letter.
//!
//! Resolution is pure.  Nothing here reads or writes the filesystem, and the
//! returned directories need not exist yet.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    common::RelativePath,
    error::DomainError,
    value_objects::{ArtifactKind, ArtifactName, Branch, TemplateKind},
};

/// Extension every generated source file carries.
pub const SOURCE_EXTENSION: &str = "java";

const PRESENTATION: &str = "presentation";
const WEB: &str = "web";
const APPLICATION: &str = "application";
const DOMAIN: &str = "domain";
const DTO: &str = "dto";
const EXCEPTION_ADVICE_DIR: &str = "ExceptionAdvice";

/// Command/query grouping derived from a raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSegments<'a> {
    pub lead: &'a str,
    pub branch: Branch,
}

impl<'a> NameSegments<'a> {
    pub fn of(name: &'a ArtifactName) -> Self {
        Self {
            lead: name.lead_segment(),
            branch: name.branch(),
        }
    }
}

/// One file to be written: directory, file name and template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub directory: RelativePath,
    pub file_name: String,
    pub template: TemplateKind,
}

impl ResolvedTarget {
    fn new(directory: RelativePath, stem: &str, template: TemplateKind) -> Self {
        Self {
            directory,
            file_name: format!("{stem}.{SOURCE_EXTENSION}"),
            template,
        }
    }

    /// Directory joined with the file name, relative to the project root.
    pub fn relative_file(&self) -> std::path::PathBuf {
        self.directory.as_path().join(&self.file_name)
    }
}

impl fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.directory, self.file_name)
    }
}

/// Everything a single `create` call writes, in write order.
///
/// Companions come first and the primary file last, so a failure on the
/// primary leaves the companions on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub kind: ArtifactKind,
    pub name: ArtifactName,
    pub companions: Vec<ResolvedTarget>,
    pub primary: ResolvedTarget,
}

impl GenerationPlan {
    /// Targets in the order they are written.
    pub fn targets(&self) -> impl Iterator<Item = &ResolvedTarget> {
        self.companions.iter().chain(std::iter::once(&self.primary))
    }
}

/// Human-readable description of a placement rule, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRule {
    pub kind: ArtifactKind,
    pub directory: &'static str,
    pub file: &'static str,
}

/// Stateless path resolver.
pub struct PathResolver;

impl PathResolver {
    /// Resolve a kind token and raw name.
    ///
    /// Fails with [`DomainError::UnknownKind`] before looking at the name.
    pub fn resolve_str(kind: &str, raw_name: &str) -> Result<ResolvedTarget, DomainError> {
        let kind: ArtifactKind = kind.parse()?;
        let name = ArtifactName::parse(raw_name)?;
        Self::resolve(kind, &name)
    }

    /// Resolve the primary file for `kind` and `name`.
    pub fn resolve(kind: ArtifactKind, name: &ArtifactName) -> Result<ResolvedTarget, DomainError> {
        let normalized = name.normalized();
        let raw = name.raw();

        let target = match kind {
            ArtifactKind::Controller => ResolvedTarget::new(
                RelativePath::from_segments([PRESENTATION, WEB, raw])?,
                &format!("{normalized}Controller"),
                kind.template(),
            ),
            ArtifactKind::Service | ArtifactKind::Facade => {
                let segments = NameSegments::of(name);
                let mut dirs = vec![APPLICATION, segments.branch.as_str()];
                // A name that starts with a capital has no lead; the folder is skipped.
                if !segments.lead.is_empty() {
                    dirs.push(segments.lead);
                }
                dirs.push(kind.as_str());
                ResolvedTarget::new(
                    RelativePath::from_segments(dirs)?,
                    &normalized,
                    kind.template(),
                )
            }
            ArtifactKind::Entity | ArtifactKind::Vo => {
                let group = raw.to_lowercase();
                ResolvedTarget::new(
                    RelativePath::from_segments([DOMAIN, group.as_str(), kind.as_str()])?,
                    &normalized,
                    kind.template(),
                )
            }
            ArtifactKind::Command | ArtifactKind::Query => ResolvedTarget::new(
                RelativePath::from_segments([
                    PRESENTATION,
                    WEB,
                    normalized.as_str(),
                    DTO,
                    kind.as_str(),
                ])?,
                raw,
                kind.template(),
            ),
            ArtifactKind::ExceptionAdvice => ResolvedTarget::new(
                Self::exception_advice_dir()?,
                raw,
                kind.template(),
            ),
        };

        debug!(%kind, name = %name, target = %target, "resolved artifact target");
        Ok(target)
    }

    /// Resolve the primary file plus any fixed companions.
    pub fn plan(kind: ArtifactKind, name: ArtifactName) -> Result<GenerationPlan, DomainError> {
        let primary = Self::resolve(kind, &name)?;
        let companions = kind
            .companions()
            .iter()
            .filter_map(|template| {
                template
                    .fixed_stem()
                    .map(|stem| ResolvedTarget::new(primary.directory.clone(), stem, *template))
            })
            .collect();

        Ok(GenerationPlan {
            kind,
            name,
            companions,
            primary,
        })
    }

    /// The catalog of placement rules, one per kind.
    pub fn rules() -> Vec<PlacementRule> {
        ArtifactKind::ALL
            .into_iter()
            .map(|kind| {
                let (directory, file) = match kind {
                    ArtifactKind::Controller => ("presentation/web/{name}", "{Name}Controller.java"),
                    ArtifactKind::Service => {
                        ("application/{command|query}/{lead}/service", "{Name}.java")
                    }
                    ArtifactKind::Facade => {
                        ("application/{command|query}/{lead}/facade", "{Name}.java")
                    }
                    ArtifactKind::Entity => ("domain/{name lowercased}/entity", "{Name}.java"),
                    ArtifactKind::Vo => ("domain/{name lowercased}/vo", "{Name}.java"),
                    ArtifactKind::Command => ("presentation/web/{Name}/dto/command", "{name}.java"),
                    ArtifactKind::Query => ("presentation/web/{Name}/dto/query", "{name}.java"),
                    ArtifactKind::ExceptionAdvice => (
                        "presentation/web/ExceptionAdvice",
                        "{name}.java + ApiError.java + ApiErrorType.java",
                    ),
                };
                PlacementRule {
                    kind,
                    directory,
                    file,
                }
            })
            .collect()
    }

    fn exception_advice_dir() -> Result<RelativePath, DomainError> {
        RelativePath::from_segments([PRESENTATION, WEB, EXCEPTION_ADVICE_DIR])
    }
}
