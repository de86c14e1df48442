use serde_json::Value;

use crate::error::{Error, Result};

/// Uppercase the first character of `word`, leaving the rest unchanged.
///
/// Uses Unicode case mapping, so a single leading character may expand
/// (`"ß"` becomes `"SS"`). The empty string stays empty.
///
/// # Examples
///
/// ```
/// use orchard::capitalize_str;
///
/// assert_eq!(capitalize_str("hello"), "Hello");
/// assert_eq!(capitalize_str("éclair"), "Éclair");
/// assert_eq!(capitalize_str(""), "");
/// ```
pub fn capitalize_str(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize a runtime-typed value.
///
/// Only `Value::String` is accepted; numbers, `null`, booleans, arrays and
/// objects fail with [`Error::NotAString`].
///
/// # Examples
///
/// ```
/// use orchard::{capitalize, Error};
/// use serde_json::json;
///
/// assert_eq!(capitalize(&json!("hello")).unwrap(), "Hello");
/// assert_eq!(capitalize(&json!(42)), Err(Error::NotAString));
/// ```
pub fn capitalize(word: &Value) -> Result<String> {
    match word {
        Value::String(s) => Ok(capitalize_str(s)),
        _ => Err(Error::NotAString),
    }
}
