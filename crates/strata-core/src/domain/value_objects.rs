//! Domain value objects: ArtifactKind, Branch, TemplateKind, ArtifactName.
//!
//! These are pure value types with equality-by-value and no identity.
//! Placement rules live in `resolver.rs`; this file only defines the types,
//! their string forms and their parsers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    naming::{capitalize_first, split_before_first_uppercase},
};

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// The category of generated stub.
///
/// The set is closed: adding a kind means adding a variant here, a placement
/// rule in `resolver.rs`, and a template in the adapters crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Controller,
    Service,
    Facade,
    Entity,
    Vo,
    Command,
    Query,
    ExceptionAdvice,
}

impl ArtifactKind {
    /// Every kind, in catalog order.
    pub const ALL: [ArtifactKind; 8] = [
        Self::Controller,
        Self::Service,
        Self::Facade,
        Self::Entity,
        Self::Vo,
        Self::Command,
        Self::Query,
        Self::ExceptionAdvice,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Service => "service",
            Self::Facade => "facade",
            Self::Entity => "entity",
            Self::Vo => "vo",
            Self::Command => "command",
            Self::Query => "query",
            Self::ExceptionAdvice => "exception-advice",
        }
    }

    /// Whether this kind is filed under `application/{command|query}/…`.
    pub const fn is_bifurcated(&self) -> bool {
        matches!(self, Self::Service | Self::Facade)
    }

    /// The template used for the primary file of this kind.
    pub const fn template(&self) -> TemplateKind {
        match self {
            Self::Controller => TemplateKind::Controller,
            Self::Service => TemplateKind::Service,
            Self::Facade => TemplateKind::Facade,
            Self::Entity => TemplateKind::Entity,
            Self::Vo => TemplateKind::Vo,
            Self::Command => TemplateKind::Command,
            Self::Query => TemplateKind::Query,
            Self::ExceptionAdvice => TemplateKind::ExceptionAdvice,
        }
    }

    /// Fixed files written next to the primary file.
    pub const fn companions(&self) -> &'static [TemplateKind] {
        match self {
            Self::ExceptionAdvice => &[TemplateKind::ApiError, TemplateKind::ApiErrorType],
            _ => &[],
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    /// Tokens are matched exactly; `Service` or `exception_advice` are unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::UnknownKind { kind: s.to_string() })
    }
}

// ── Branch ───────────────────────────────────────────────────────────────────

/// Command/query partition of the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Command,
    Query,
}

impl Branch {
    /// `Query` when the lower-cased name contains `query` anywhere, `Command`
    /// otherwise.  This is a substring test: `subqueryHandler` is a query.
    pub fn classify(raw: &str) -> Self {
        if raw.to_lowercase().contains("query") {
            Self::Query
        } else {
            Self::Command
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// Key into the template catalog.
///
/// Mirrors [`ArtifactKind`] plus the two fixed companions of
/// `exception-advice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Controller,
    Service,
    Facade,
    Entity,
    Vo,
    Command,
    Query,
    ExceptionAdvice,
    ApiError,
    ApiErrorType,
}

impl TemplateKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Service => "service",
            Self::Facade => "facade",
            Self::Entity => "entity",
            Self::Vo => "vo",
            Self::Command => "command",
            Self::Query => "query",
            Self::ExceptionAdvice => "exception-advice",
            Self::ApiError => "api-error",
            Self::ApiErrorType => "api-error-type",
        }
    }

    /// File stem for templates whose file name does not depend on user input.
    pub const fn fixed_stem(&self) -> Option<&'static str> {
        match self {
            Self::ApiError => Some("ApiError"),
            Self::ApiErrorType => Some("ApiErrorType"),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ArtifactName ─────────────────────────────────────────────────────────────

/// A caller-supplied identifier that is safe to use as a path segment.
///
/// Only what the transforms and the path invariant need is checked: the name
/// must be non-empty, must not be `.` or `..`, and must not contain a path
/// separator or NUL.  Casing and charset are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let reason = if raw.is_empty() {
            Some("name cannot be empty")
        } else if raw == "." || raw == ".." {
            Some("name cannot be a relative directory reference")
        } else if raw.contains(['/', '\\']) {
            Some("name cannot contain path separators")
        } else if raw.contains('\0') {
            Some("name cannot contain NUL")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidName { name: raw, reason }),
            None => Ok(Self(raw)),
        }
    }

    /// The name exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// The name with its first character upper-cased (class/file stem).
    pub fn normalized(&self) -> String {
        capitalize_first(&self.0)
    }

    /// Substring before the first upper-case letter, used as a grouping folder.
    pub fn lead_segment(&self) -> &str {
        split_before_first_uppercase(&self.0)
    }

    pub fn branch(&self) -> Branch {
        Branch::classify(&self.0)
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ArtifactName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
