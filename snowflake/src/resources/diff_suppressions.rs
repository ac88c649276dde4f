//! Diff suppressors attached to resource attributes
//!
//! Every suppressor fails safe: when the data it needs is missing or shaped
//! unexpectedly it returns `false` and the difference stays in the plan.

use super::QueryOutputs;
use tfplug::{DiffSuppressor, Dynamic, ResourceData, SuppressFn};
use tracing::debug;

/// Suppresses differences that vanish after normalizing both sides
pub struct NormalizeAndCompare<T, E> {
    normalize: Box<dyn Fn(&str) -> Result<T, E> + Send + Sync>,
}

impl<T, E> NormalizeAndCompare<T, E> {
    pub fn new(normalize: impl Fn(&str) -> Result<T, E> + Send + Sync + 'static) -> Self {
        Self {
            normalize: Box::new(normalize),
        }
    }
}

impl<T: PartialEq, E> DiffSuppressor for NormalizeAndCompare<T, E> {
    fn suppress(&self, _: &str, old: &str, new: &str, _: &ResourceData) -> bool {
        let Ok(old) = (self.normalize)(old) else {
            return false;
        };
        let Ok(new) = (self.normalize)(new) else {
            return false;
        };
        old == new
    }
}

pub fn normalize_and_compare<T, E>(
    normalize: impl Fn(&str) -> Result<T, E> + Send + Sync + 'static,
) -> SuppressFn
where
    T: PartialEq + 'static,
    E: 'static,
{
    Box::new(NormalizeAndCompare::new(normalize))
}

/// Ignores changes to an attribute once the resource exists.
///
/// New resources always show the diff so the initial value gets set.
pub fn ignore_after_creation(_: &str, _: &str, _: &str, data: &ResourceData) -> bool {
    data.has_identity()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryOutput {
    Show,
    Describe,
}

/// Ignores a change whose new value is what Snowflake already reports
pub struct IgnoreChangeToCurrentValue {
    field: String,
    output: QueryOutput,
}

impl IgnoreChangeToCurrentValue {
    fn current_value(&self, data: &ResourceData) -> tfplug::Result<Option<String>> {
        let value: &Dynamic = match self.output {
            QueryOutput::Show => data
                .show_output()?
                .get(&self.field)
                .ok_or_else(|| tfplug::TfplugError::AttributeNotFound(self.field.clone()))?,
            QueryOutput::Describe => data.describe_value(&self.field)?,
        };
        Ok(value.to_flat_string())
    }
}

impl DiffSuppressor for IgnoreChangeToCurrentValue {
    fn suppress(&self, _: &str, _: &str, new: &str, data: &ResourceData) -> bool {
        if !data.has_identity() {
            return false;
        }

        match self.current_value(data) {
            Ok(Some(current)) => {
                let matches = new == current;
                debug!(
                    output = ?self.output,
                    field = %self.field,
                    current = %current,
                    new = %new,
                    matches,
                    "comparing new value with current Snowflake value"
                );
                matches
            }
            Ok(None) => {
                debug!(
                    output = ?self.output,
                    field = %self.field,
                    "current value has no flat form"
                );
                false
            }
            Err(e) => {
                debug!(
                    output = ?self.output,
                    field = %self.field,
                    error = %e,
                    "current value unavailable"
                );
                false
            }
        }
    }
}

pub fn ignore_change_to_current_snowflake_value_in_show(field: impl Into<String>) -> SuppressFn {
    Box::new(IgnoreChangeToCurrentValue {
        field: field.into(),
        output: QueryOutput::Show,
    })
}

pub fn ignore_change_to_current_snowflake_value_in_describe(
    field: impl Into<String>,
) -> SuppressFn {
    Box::new(IgnoreChangeToCurrentValue {
        field: field.into(),
        output: QueryOutput::Describe,
    })
}

/// Suppresses when any of the wrapped suppressors does.
///
/// All suppressors run on every call, there is no short-circuit.
pub struct SuppressIfAny {
    suppressors: Vec<SuppressFn>,
}

impl SuppressIfAny {
    pub fn new(suppressors: Vec<SuppressFn>) -> Self {
        Self { suppressors }
    }
}

impl DiffSuppressor for SuppressIfAny {
    fn suppress(&self, key: &str, old: &str, new: &str, data: &ResourceData) -> bool {
        self.suppressors
            .iter()
            .map(|s| s.suppress(key, old, new, data))
            .fold(false, |suppress, result| suppress || result)
    }
}

pub fn suppress_if_any(suppressors: Vec<SuppressFn>) -> SuppressFn {
    Box::new(SuppressIfAny::new(suppressors))
}

/// Ignores set members Snowflake adds on its own while a parameter is enabled.
///
/// With the parameter on, the set size key (`<key>.#`) is suppressed when the
/// number of members outside `values` did not change, and element keys are
/// suppressed when the old member is one of `values`.
pub struct IgnoreValuesFromSetIfParamSet {
    key: String,
    size_key: String,
    param: String,
    values: Vec<String>,
}

impl IgnoreValuesFromSetIfParamSet {
    pub fn new(key: impl Into<String>, param: impl Into<String>, values: Vec<String>) -> Self {
        let key = key.into();
        Self {
            size_key: format!("{}.#", key),
            key,
            param: param.into(),
            values,
        }
    }

    fn is_ignored(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Members outside the ignore-list; `None` while the set is not known
    fn count_kept(&self, set: &Dynamic) -> Option<usize> {
        let members = match set {
            Dynamic::Null => return Some(0),
            Dynamic::List(members) => members,
            _ => return None,
        };
        if members.iter().any(Dynamic::is_unknown) {
            return None;
        }
        Some(
            set.string_members()
                .iter()
                .filter(|member| !self.is_ignored(member))
                .count(),
        )
    }
}

impl DiffSuppressor for IgnoreValuesFromSetIfParamSet {
    fn suppress(&self, key: &str, old: &str, _: &str, data: &ResourceData) -> bool {
        let parameter = match data.related_parameter(&self.param) {
            Ok(parameter) => parameter,
            Err(e) => {
                debug!(param = %self.param, error = %e, "governing parameter unavailable");
                return false;
            }
        };
        if !parameter.is_enabled() {
            return false;
        }

        if key == self.size_key {
            let (old_set, new_set) = data.get_change(&self.key);
            return match (self.count_kept(old_set), self.count_kept(new_set)) {
                (Some(old_kept), Some(new_kept)) => old_kept == new_kept,
                _ => {
                    debug!(key = %self.key, "set membership not known yet");
                    false
                }
            };
        }
        self.is_ignored(old)
    }
}

pub fn ignore_values_from_set_if_param_set<S: Into<String>>(
    key: impl Into<String>,
    param: impl Into<String>,
    values: impl IntoIterator<Item = S>,
) -> SuppressFn {
    Box::new(IgnoreValuesFromSetIfParamSet::new(
        key,
        param,
        values.into_iter().map(Into::into).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{
        DESCRIBE_OUTPUT_ATTRIBUTE_NAME, RELATED_PARAMETERS_ATTRIBUTE_NAME,
        SHOW_OUTPUT_ATTRIBUTE_NAME,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn row(pairs: Vec<(&str, Dynamic)>) -> Dynamic {
        Dynamic::Map(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    fn existing() -> ResourceData {
        ResourceData::new().with_id("MY_WAREHOUSE")
    }

    #[test]
    fn normalize_and_compare_ignores_case() {
        let suppressor = normalize_and_compare(|s: &str| Ok::<_, ()>(s.to_uppercase()));
        let data = ResourceData::new();

        assert!(suppressor.suppress("name", "abc", "ABC", &data));
        assert!(!suppressor.suppress("name", "abc", "abd", &data));
    }

    #[test]
    fn normalize_and_compare_fails_safe_on_parse_error() {
        let suppressor = normalize_and_compare(|s: &str| s.parse::<i64>());
        let data = ResourceData::new();

        assert!(suppressor.suppress("size", "01", "1", &data));
        assert!(!suppressor.suppress("size", "x", "x", &data));
        assert!(!suppressor.suppress("size", "1", "x", &data));
        assert!(!suppressor.suppress("size", "x", "1", &data));
    }

    #[test]
    fn ignore_after_creation_depends_only_on_identity() {
        assert!(!ignore_after_creation("k", "a", "b", &ResourceData::new()));
        assert!(ignore_after_creation("k", "a", "b", &existing()));
        assert!(ignore_after_creation("k", "", "", &existing()));
    }

    #[test]
    fn show_value_suppresses_only_on_existing_resource() {
        let suppressor = ignore_change_to_current_snowflake_value_in_show("auto_suspend");
        let show = Dynamic::List(vec![row(vec![("auto_suspend", Dynamic::Number(600.0))])]);

        let created =
            ResourceData::new().with_state_attribute(SHOW_OUTPUT_ATTRIBUTE_NAME, show.clone());
        assert!(!suppressor.suppress("auto_suspend", "0", "600", &created));

        let data = existing().with_state_attribute(SHOW_OUTPUT_ATTRIBUTE_NAME, show);
        assert!(suppressor.suppress("auto_suspend", "0", "600", &data));
        assert!(!suppressor.suppress("auto_suspend", "0", "60", &data));
    }

    #[test]
    fn show_value_missing_field_is_not_suppressed() {
        let suppressor = ignore_change_to_current_snowflake_value_in_show("comment");
        let data = existing().with_state_attribute(
            SHOW_OUTPUT_ATTRIBUTE_NAME,
            Dynamic::List(vec![row(vec![("name", Dynamic::string("WH"))])]),
        );

        assert!(!suppressor.suppress("comment", "a", "", &data));
    }

    #[test]
    fn describe_value_requires_single_nested_row() {
        let suppressor = ignore_change_to_current_snowflake_value_in_describe("comment");
        let nested = |rows: Vec<Dynamic>| {
            existing().with_state_attribute(
                DESCRIBE_OUTPUT_ATTRIBUTE_NAME,
                Dynamic::List(vec![row(vec![("comment", Dynamic::List(rows))])]),
            )
        };

        let single = nested(vec![row(vec![("value", Dynamic::string("X"))])]);
        assert!(suppressor.suppress("comment", "", "X", &single));

        let empty = nested(vec![]);
        assert!(!suppressor.suppress("comment", "", "X", &empty));
    }

    #[test]
    fn suppress_if_any_runs_every_suppressor() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = |result: bool| -> SuppressFn {
            let calls = Arc::clone(&calls);
            Box::new(move |_: &str, _: &str, _: &str, _: &ResourceData| {
                calls.fetch_add(1, Ordering::SeqCst);
                result
            })
        };

        let suppressor = suppress_if_any(vec![counting(true), counting(false), counting(true)]);
        assert!(suppressor.suppress("k", "a", "b", &ResourceData::new()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn suppress_if_any_without_suppressors_keeps_diff() {
        assert!(!suppress_if_any(vec![]).suppress("k", "a", "b", &ResourceData::new()));
    }

    #[test]
    fn set_values_ignored_only_when_parameter_enabled() {
        let suppressor =
            ignore_values_from_set_if_param_set("tags", "ENABLE_TAGS", ["ignored1"]);
        let with_flag = |flag: &str| {
            ResourceData::new()
                .with_state_attribute(
                    RELATED_PARAMETERS_ATTRIBUTE_NAME,
                    Dynamic::List(vec![row(vec![(
                        "enable_tags",
                        Dynamic::List(vec![row(vec![("value", Dynamic::string(flag))])]),
                    )])]),
                )
                .with_state_attribute("tags", Dynamic::string_list(["a", "ignored1"]))
                .with_planned_attribute("tags", Dynamic::string_list(["a"]))
        };

        let enabled = with_flag("true");
        assert!(suppressor.suppress("tags.#", "2", "1", &enabled));
        assert!(suppressor.suppress("tags.123", "ignored1", "", &enabled));
        assert!(!suppressor.suppress("tags.456", "a", "", &enabled));

        let disabled = with_flag("false");
        assert!(!suppressor.suppress("tags.#", "2", "1", &disabled));
        assert!(!suppressor.suppress("tags.123", "ignored1", "", &disabled));
    }

    #[test]
    fn set_size_not_suppressed_while_planned_set_is_unknown() {
        let suppressor =
            ignore_values_from_set_if_param_set("tags", "ENABLE_TAGS", ["ignored1"]);
        let parameters = Dynamic::List(vec![row(vec![(
            "enable_tags",
            Dynamic::List(vec![row(vec![("value", Dynamic::string("true"))])]),
        )])]);
        let prior = existing()
            .with_state_attribute(RELATED_PARAMETERS_ATTRIBUTE_NAME, parameters)
            .with_state_attribute("tags", Dynamic::string_list(["a", "ignored1"]));

        let unknown_set = prior.clone().with_planned_attribute("tags", Dynamic::Unknown);
        assert!(!suppressor.suppress("tags.#", "2", "", &unknown_set));

        let unknown_member = prior.with_planned_attribute(
            "tags",
            Dynamic::List(vec![Dynamic::string("a"), Dynamic::Unknown]),
        );
        assert!(!suppressor.suppress("tags.#", "2", "2", &unknown_member));
    }
}
