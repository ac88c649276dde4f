//! Plan-time helpers for the Snowflake Terraform provider
//!
//! Diff suppressors attached to resource attributes, the normalizers they
//! compare with, and the config builder used by acceptance tests.

pub mod acceptance;
pub mod error;
pub mod helpers;
pub mod resources;
pub mod sdk;

pub use error::{Error, Result};
