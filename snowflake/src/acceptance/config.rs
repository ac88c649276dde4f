//! Terraform configuration generated from typed resource models
//!
//! Acceptance tests describe resources as structs and turn them into HCL with
//! [`from_model`]. Every top-level field is written as `name = <json literal>`,
//! which HCL accepts for strings, numbers and booleans. Nested objects, lists
//! and sets are written as JSON too and may need hand-written config instead.

use crate::error::{Error, Result};
use crate::resources::Resource;
use serde::Serialize;
use tracing::debug;

/// Name given to a resource block when the test does not pick one
pub const DEFAULT_RESOURCE_NAME: &str = "test";

/// A resource config usable in acceptance tests
pub trait ResourceModel: Serialize {
    /// Terraform resource type, e.g. `snowflake_warehouse`
    fn resource_type(&self) -> String;
    fn resource_name(&self) -> &str;
    fn set_resource_name(&mut self, name: &str);
}

/// Resource type and block name, kept out of the serialized fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceModelMeta {
    name: String,
    resource: Resource,
}

impl ResourceModelMeta {
    pub fn new(name: impl Into<String>, resource: Resource) -> Self {
        Self {
            name: name.into(),
            resource,
        }
    }

    pub fn default_meta(resource: Resource) -> Self {
        Self::new(DEFAULT_RESOURCE_NAME, resource)
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }
}

/// Models embedding a [`ResourceModelMeta`] get [`ResourceModel`] for free
pub trait HasResourceModelMeta {
    fn meta(&self) -> &ResourceModelMeta;
    fn meta_mut(&mut self) -> &mut ResourceModelMeta;
}

impl<T> ResourceModel for T
where
    T: HasResourceModelMeta + Serialize,
{
    fn resource_type(&self) -> String {
        self.meta().resource.to_string()
    }

    fn resource_name(&self) -> &str {
        &self.meta().name
    }

    fn set_resource_name(&mut self, name: &str) {
        self.meta_mut().name = name.to_string();
    }
}

/// Render a model as a `resource` block
pub fn try_from_model<M: ResourceModel + ?Sized>(model: &M) -> Result<String> {
    let fields = match serde_json::to_value(model)? {
        serde_json::Value::Object(fields) => fields,
        other => return Err(Error::NotAnObject(other.to_string())),
    };

    let mut config = format!(
        "resource \"{}\" \"{}\" {{\n",
        model.resource_type(),
        model.resource_name()
    );
    for (key, value) in &fields {
        config.push_str(&format!("\t{} = {}\n", key, value));
    }
    config.push_str("}\n");

    debug!("Generated config:\n{}", config);
    Ok(config)
}

/// Render a model as a `resource` block for use in a test step.
///
/// # Panics
///
/// Panics when the model cannot be serialized, failing the running test.
pub fn from_model<M: ResourceModel + ?Sized>(model: &M) -> String {
    try_from_model(model).unwrap_or_else(|e| panic!("failed to generate config: {}", e))
}
