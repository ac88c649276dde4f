//! Read access to a resource instance during plan
//!
//! [`ResourceData`] is the snapshot the framework hands to diff suppressors: the
//! resource identity, the prior state and the proposed (planned) state. Nested
//! blocks are lists of maps; the cardinality helpers here turn "there must be
//! exactly one of these" into a typed error instead of an index access.

use crate::error::{Result, TfplugError};
use crate::types::{Dynamic, DynamicValue};
use std::collections::HashMap;

/// A nested block entry: one map inside a list-of-maps attribute
pub type Block = HashMap<String, Dynamic>;

static NULL: Dynamic = Dynamic::Null;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: Option<String>,
    state: HashMap<String, Dynamic>,
    planned: HashMap<String, Dynamic>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the prior and planned objects Terraform sent.
    ///
    /// The identity is the prior state's `id` attribute; a resource being
    /// created has no prior state and therefore no identity.
    pub fn from_values(prior: DynamicValue, planned: DynamicValue) -> Result<Self> {
        let state = prior.into_attributes()?;
        let planned = planned.into_attributes()?;
        let id = state
            .get("id")
            .and_then(Dynamic::as_string)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(Self { id, state, planned })
    }

    pub fn from_msgpack(prior: &[u8], planned: &[u8]) -> Result<Self> {
        Self::from_values(
            DynamicValue::decode_msgpack(prior)?,
            DynamicValue::decode_msgpack(planned)?,
        )
    }

    pub fn from_json(prior: &[u8], planned: &[u8]) -> Result<Self> {
        Self::from_values(
            DynamicValue::decode_json(prior)?,
            DynamicValue::decode_json(planned)?,
        )
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_state_attribute(mut self, key: impl Into<String>, value: Dynamic) -> Self {
        self.state.insert(key.into(), value);
        self
    }

    pub fn with_planned_attribute(mut self, key: impl Into<String>, value: Dynamic) -> Self {
        self.planned.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// True once the resource exists remotely
    pub fn has_identity(&self) -> bool {
        self.id().is_some()
    }

    /// Current value of an attribute: the planned value when it is known,
    /// otherwise the prior state value.
    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        match self.planned.get(key) {
            Some(value) if !value.is_unknown() => Some(value),
            _ => self.state.get(key),
        }
    }

    /// Like [`ResourceData::get`] but treats zero values as absent
    pub fn get_ok(&self, key: &str) -> Option<&Dynamic> {
        self.get(key).filter(|value| !value.is_zero())
    }

    /// Prior and proposed value of an attribute; a missing side is null.
    ///
    /// The proposed side is the planned value as sent, so a value Terraform
    /// does not know yet comes back as [`Dynamic::Unknown`].
    pub fn get_change(&self, key: &str) -> (&Dynamic, &Dynamic) {
        let old = self.state.get(key).unwrap_or(&NULL);
        let new = self.planned.get(key).unwrap_or(&NULL);
        (old, new)
    }

    /// An attribute holding a list of maps
    pub fn block(&self, key: &str) -> Result<Vec<&Block>> {
        let value = self
            .get(key)
            .ok_or_else(|| TfplugError::AttributeNotFound(key.to_string()))?;
        blocks(key, value)
    }

    /// An attribute holding exactly one map, like computed `show_output` blocks
    pub fn single_block(&self, key: &str) -> Result<&Block> {
        exactly_one(key, self.block(key)?)
    }
}

/// Interpret a value as a list of maps
pub fn blocks<'a>(attribute: &str, value: &'a Dynamic) -> Result<Vec<&'a Block>> {
    let items = value.as_list().ok_or_else(|| TfplugError::TypeMismatch {
        expected: "list".to_string(),
        actual: value.type_name().to_string(),
    })?;

    items
        .iter()
        .map(|item| {
            item.as_map().ok_or_else(|| TfplugError::TypeMismatch {
                expected: format!("map in {}", attribute),
                actual: item.type_name().to_string(),
            })
        })
        .collect()
}

/// Take the only element of a collection
pub fn exactly_one<T>(attribute: &str, items: impl IntoIterator<Item = T>) -> Result<T> {
    let mut items = items.into_iter();
    match (items.next(), items.next()) {
        (Some(item), None) => Ok(item),
        (first, second) => Err(TfplugError::Cardinality {
            attribute: attribute.to_string(),
            expected: "exactly one".to_string(),
            actual: usize::from(first.is_some()) + usize::from(second.is_some()) + items.count(),
        }),
    }
}

/// Take the first element of a collection that must not be empty
pub fn at_least_one<T>(attribute: &str, items: impl IntoIterator<Item = T>) -> Result<T> {
    items
        .into_iter()
        .next()
        .ok_or_else(|| TfplugError::Cardinality {
            attribute: attribute.to_string(),
            expected: "at least one".to_string(),
            actual: 0,
        })
}
