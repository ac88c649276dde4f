//! Typed access to the computed query outputs stored on a resource
//!
//! Resources keep the last `SHOW`, `DESCRIBE` and `SHOW PARAMETERS` results in
//! computed attributes, each a single-element list of maps:
//!
//! ```text
//! show_output     = [{ name = "WH", comment = "..." , ... }]
//! describe_output = [{ comment = [{ value = "...", default = "..." }], ... }]
//! parameters      = [{ enable_tags = [{ value = "true", level = "ACCOUNT", ... }] }]
//! ```

use super::{
    DESCRIBE_OUTPUT_ATTRIBUTE_NAME, RELATED_PARAMETERS_ATTRIBUTE_NAME, SHOW_OUTPUT_ATTRIBUTE_NAME,
};
use crate::helpers::parse_bool;
use tfplug::resource_data::blocks;
use tfplug::{exactly_one, Block, Dynamic, ResourceData, Result, TfplugError};

/// One `SHOW PARAMETERS` row, with the flag parsed up front
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterValue {
    pub value: String,
    pub default: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    flag: Option<bool>,
}

impl ParameterValue {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            flag: parse_bool(&value),
            value,
            default: None,
            level: None,
            description: None,
        }
    }

    pub fn from_block(name: &str, block: &Block) -> Result<Self> {
        let field = |key: &str| block.get(key).and_then(Dynamic::to_flat_string);

        let value = field("value")
            .ok_or_else(|| TfplugError::AttributeNotFound(format!("{}.value", name)))?;

        Ok(Self {
            default: field("default"),
            level: field("level"),
            description: field("description"),
            ..Self::new(value)
        })
    }

    /// The value as a boolean flag, if it is one
    pub fn flag(&self) -> Option<bool> {
        self.flag
    }

    /// True only for values that read as an enabled flag
    pub fn is_enabled(&self) -> bool {
        self.flag.unwrap_or(false)
    }
}

/// Query-output lookups on top of [`ResourceData`]
pub trait QueryOutputs {
    /// The single `show_output` row
    fn show_output(&self) -> Result<&Block>;

    /// The single `describe_output` entry
    fn describe_output(&self) -> Result<&Block>;

    /// The `value` of a describe property, which is itself a single-row block
    fn describe_value(&self, property: &str) -> Result<&Dynamic>;

    /// A parameter row from `parameters`, looked up by lowercased name
    fn related_parameter(&self, name: &str) -> Result<ParameterValue>;
}

impl QueryOutputs for ResourceData {
    fn show_output(&self) -> Result<&Block> {
        self.single_block(SHOW_OUTPUT_ATTRIBUTE_NAME)
    }

    fn describe_output(&self) -> Result<&Block> {
        self.single_block(DESCRIBE_OUTPUT_ATTRIBUTE_NAME)
    }

    fn describe_value(&self, property: &str) -> Result<&Dynamic> {
        let property_blocks = self
            .describe_output()?
            .get(property)
            .ok_or_else(|| TfplugError::AttributeNotFound(property.to_string()))?;

        exactly_one(property, blocks(property, property_blocks)?)?
            .get("value")
            .ok_or_else(|| TfplugError::AttributeNotFound(format!("{}.value", property)))
    }

    fn related_parameter(&self, name: &str) -> Result<ParameterValue> {
        let key = name.to_lowercase();
        let rows = self
            .single_block(RELATED_PARAMETERS_ATTRIBUTE_NAME)?
            .get(&key)
            .ok_or_else(|| TfplugError::AttributeNotFound(key.clone()))?;

        ParameterValue::from_block(&key, exactly_one(&key, blocks(&key, rows)?)?)
    }
}
