//! Flattening of key-value objects through compact JSON text.
//!
//! [`flatten`] replaces every array- or object-valued property with its JSON
//! encoding, so the result only holds scalar kinds. [`unflatten`] reverses it by
//! decoding every string property that looks like encoded JSON.
//!
//! ```rust
//! use serde_keyvalue::{flatten, keyvalue, unflatten, Value};
//!
//! let nested = keyvalue!({ "user": { "id": "1", "name": "a" } });
//! let flat = flatten(&nested).unwrap();
//!
//! assert_eq!(
//!     flat.as_object().unwrap().get("user"),
//!     Some(&Value::from(r#"{"id":"1","name":"a"}"#))
//! );
//! assert_eq!(unflatten(&flat).unwrap(), nested);
//! ```
//!
//! ## Known limitation
//!
//! Whether a string gets decoded depends only on its first and last characters.
//! A string such as `"[literally this]"` that was never produced by [`flatten`]
//! is still decoded by [`unflatten`], and fails with [`Error::Codec`](crate::Error::Codec) when it is
//! not valid JSON.

use crate::validate::expect_object;
use crate::{KeyValueMap, Result, Value};
use tracing::trace;

/// Encodes `value` as compact JSON.
///
/// # Errors
///
/// Returns [`Error::Codec`](crate::Error::Codec) if the value holds a big integer.
pub fn encode(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decodes JSON text into a value.
///
/// # Errors
///
/// Returns [`Error::Codec`](crate::Error::Codec) if `text` is not valid JSON.
pub fn decode(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Returns `true` if `text` is bracketed like an encoded object or array.
///
/// # Examples
///
/// ```rust
/// use serde_keyvalue::is_encoded_value;
///
/// assert!(is_encoded_value(r#"{"a":1}"#));
/// assert!(is_encoded_value("[1,2]"));
/// assert!(!is_encoded_value("{half]"));
/// assert!(!is_encoded_value("plain"));
/// ```
#[must_use]
pub fn is_encoded_value(text: &str) -> bool {
    (text.starts_with('{') && text.ends_with('}'))
        || (text.starts_with('[') && text.ends_with(']'))
}

/// Replaces array and object properties with their JSON encoding.
///
/// All other properties are copied unchanged. The input is not modified.
///
/// # Errors
///
/// Returns [`Error::ArgumentKind`](crate::Error::ArgumentKind) if `input` is not an object, and
/// [`Error::Codec`](crate::Error::Codec) if a container cannot be encoded.
pub fn flatten(input: &Value) -> Result<Value> {
    let object = expect_object(input)?;
    let mut output = KeyValueMap::with_capacity(object.len());

    for (key, value) in object.iter() {
        let flattened = if value.kind().is_container() {
            let text = encode(value)?;
            trace!(key = %key, len = text.len(), "encoded property");
            Value::String(text)
        } else {
            value.clone()
        };
        output.insert(key.clone(), flattened);
    }

    Ok(Value::Object(output))
}

/// Decodes string properties that look like encoded arrays or objects.
///
/// All other properties are copied unchanged. The input is not modified.
///
/// # Errors
///
/// Returns [`Error::ArgumentKind`](crate::Error::ArgumentKind) if `input` is not an object, and
/// [`Error::Codec`](crate::Error::Codec) if a bracketed string is not valid JSON.
pub fn unflatten(input: &Value) -> Result<Value> {
    let object = expect_object(input)?;
    let mut output = KeyValueMap::with_capacity(object.len());

    for (key, value) in object.iter() {
        let unflattened = match value {
            Value::String(text) if is_encoded_value(text) => {
                trace!(key = %key, len = text.len(), "decoding property");
                decode(text)?
            }
            other => other.clone(),
        };
        output.insert(key.clone(), unflattened);
    }

    Ok(Value::Object(output))
}
