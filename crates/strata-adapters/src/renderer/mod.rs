//! Template renderer adapters.

pub mod spring;

pub use spring::SpringTemplates;
