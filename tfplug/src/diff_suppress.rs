use crate::resource_data::ResourceData;

/// Decides whether a detected attribute difference is a real change
///
/// Terraform's diff engine calls suppressors once per changed attribute, with
/// the flattened attribute key (`tags.#`, `tags.1234`, `comment`) and the old
/// and new values rendered as strings. Returning `true` hides the difference
/// from the plan.
///
/// Suppressors may be called several times for the same plan, so they must be
/// deterministic for a given [`ResourceData`] and must not mutate anything.
pub trait DiffSuppressor: Send + Sync {
    fn suppress(&self, key: &str, old: &str, new: &str, data: &ResourceData) -> bool;
}

/// Boxed suppressor as stored on an attribute
pub type SuppressFn = Box<dyn DiffSuppressor>;

impl<F> DiffSuppressor for F
where
    F: Fn(&str, &str, &str, &ResourceData) -> bool + Send + Sync,
{
    fn suppress(&self, key: &str, old: &str, new: &str, data: &ResourceData) -> bool {
        self(key, old, new, data)
    }
}
