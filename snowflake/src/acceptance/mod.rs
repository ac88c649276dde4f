//! Helpers for acceptance tests

pub mod config;
pub mod model;

pub use config::{
    from_model, try_from_model, HasResourceModelMeta, ResourceModel, ResourceModelMeta,
    DEFAULT_RESOURCE_NAME,
};
