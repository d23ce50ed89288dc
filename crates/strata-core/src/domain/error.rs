use thiserror::Error;

use crate::domain::value_objects::ArtifactKind;

/// Root domain error type.
///
/// Domain errors are raised before any filesystem work starts, so none of
/// them ever leaves partial state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown artifact kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("invalid artifact name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("path segment '{segment}' would escape the project root")]
    UnsafePathSegment { segment: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownKind { kind } => {
                let mut out = vec![
                    format!("'{kind}' is not a known artifact kind"),
                    "Supported kinds:".into(),
                ];
                out.extend(ArtifactKind::ALL.iter().map(|k| format!("  • {k}")));
                out.push("Example: strata create service createOrderCommand".into());
                out
            }
            Self::InvalidName { name, reason } => vec![
                format!("Name '{name}' is invalid: {reason}"),
                "Use a plain identifier such as createOrderCommand or Order".into(),
            ],
            Self::UnsafePathSegment { .. } => vec![
                "Artifact names must not contain path separators or '..'".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownKind { .. } => ErrorCategory::NotFound,
            Self::InvalidName { .. } | Self::UnsafePathSegment { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
