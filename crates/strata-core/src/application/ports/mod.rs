//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   `strata-adapters`
//!   - `Filesystem`: directory creation and file writes
//!   - `TemplateRenderer`: the template catalog

pub mod output;

pub use output::{Filesystem, TemplateRenderer};
