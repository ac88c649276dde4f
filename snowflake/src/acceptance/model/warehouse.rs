use crate::acceptance::config::{HasResourceModelMeta, ResourceModelMeta};
use crate::resources::Resource;
use crate::sdk::WarehouseSize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WarehouseModel {
    #[serde(skip)]
    meta: ResourceModelMeta,

    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_suspend: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_resume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initially_suspended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cluster_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cluster_count: Option<i64>,
}

impl WarehouseModel {
    pub fn new(resource_name: &str, name: &str) -> Self {
        Self::with_meta(ResourceModelMeta::new(resource_name, Resource::Warehouse), name)
    }

    /// Model using the default resource block name
    pub fn with_default_meta(name: &str) -> Self {
        Self::with_meta(ResourceModelMeta::default_meta(Resource::Warehouse), name)
    }

    fn with_meta(meta: ResourceModelMeta, name: &str) -> Self {
        Self {
            meta,
            name: name.to_string(),
            warehouse_size: None,
            comment: None,
            auto_suspend: None,
            auto_resume: None,
            initially_suspended: None,
            min_cluster_count: None,
            max_cluster_count: None,
        }
    }

    pub fn with_warehouse_size(mut self, size: WarehouseSize) -> Self {
        self.warehouse_size = Some(size.to_string());
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn with_auto_suspend(mut self, seconds: i64) -> Self {
        self.auto_suspend = Some(seconds);
        self
    }

    /// The provider takes `"true"`, `"false"` or `"default"` here
    pub fn with_auto_resume(mut self, auto_resume: &str) -> Self {
        self.auto_resume = Some(auto_resume.to_string());
        self
    }

    pub fn with_initially_suspended(mut self, suspended: bool) -> Self {
        self.initially_suspended = Some(suspended);
        self
    }

    pub fn with_cluster_count(mut self, min: i64, max: i64) -> Self {
        self.min_cluster_count = Some(min);
        self.max_cluster_count = Some(max);
        self
    }
}

impl HasResourceModelMeta for WarehouseModel {
    fn meta(&self) -> &ResourceModelMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ResourceModelMeta {
        &mut self.meta
    }
}
