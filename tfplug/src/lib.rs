//! tfplug - Terraform Plugin Framework for Rust
//!
//! The plan-time side of the framework: the dynamic value model, read access to
//! a resource instance while Terraform computes a diff, and the
//! [`DiffSuppressor`] hook providers attach to attributes.

// Core modules
pub mod error;
pub mod types;

// Plan-time helpers
pub mod diff_suppress;
pub mod resource_data;

pub mod logging;

// Re-exports for convenience
pub use diff_suppress::{DiffSuppressor, SuppressFn};
pub use error::{Result, TfplugError};
pub use logging::LogLevel;
pub use resource_data::{at_least_one, exactly_one, Block, ResourceData};
pub use types::{Dynamic, DynamicValue};
