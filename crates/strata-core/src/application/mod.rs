//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`GenerateService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateService, GenerationReport, InitReport, WrittenFile};

pub use ports::{Filesystem, TemplateRenderer};

pub use error::ApplicationError;
