use rand::Rng;
use serde_json::Value;
use tracing::trace;

use crate::error::{Error, Result};

/// Pick one element of `items` using a uniform index in `[0, len)`.
///
/// Returns `None` for an empty slice.
pub fn sample<'s, T, R>(items: &'s [T], rng: &mut R) -> Option<&'s T>
where
    R: Rng,
{
    if items.is_empty() {
        return None;
    }
    let index = rng.random_range(0..items.len());
    trace!(index, len = items.len(), "sampled index");
    items.get(index)
}

/// Pick a random member of a runtime-typed array.
///
/// Uses the thread-local RNG. See [`sample_item_with`] to supply a seeded one.
///
/// # Errors
///
/// - [`Error::NotAnArray`] for numbers, strings, objects, `null` and booleans.
/// - [`Error::EmptyArray`] when the array has no members.
///
/// # Examples
///
/// ```
/// use orchard::sample_item;
/// use serde_json::json;
///
/// let fruits = json!(["apple", "banana", "orange", "pear"]);
/// let picked = sample_item(&fruits).unwrap();
/// assert!(fruits.as_array().unwrap().contains(picked));
/// ```
pub fn sample_item(sequence: &Value) -> Result<&Value> { sample_item_with(sequence, &mut rand::rng()) }

/// [`sample_item`] with an explicit random source.
pub fn sample_item_with<'v, R>(sequence: &'v Value, rng: &mut R) -> Result<&'v Value>
where
    R: Rng,
{
    let items = sequence.as_array().ok_or(Error::NotAnArray)?;
    sample(items, rng).ok_or(Error::EmptyArray)
}
