//! Validation of key-value objects.
//!
//! [`coerce`] is the gate a key-value object passes through when it crosses a
//! serialization boundary, in either direction: it accepts an object whose
//! properties are all of an allowed [`ValueKind`] and hands the same object back.

use crate::{Error, KeyValueMap, Result, Value};
use tracing::debug;

/// Checks that `value` is an object whose properties all hold allowed kinds.
///
/// Returns the same reference on success. Only the object's own properties are
/// classified; the contents of nested arrays and objects are not inspected.
///
/// # Examples
///
/// ```rust
/// use serde_keyvalue::{coerce, keyvalue, Error, Value};
///
/// let object = keyvalue!({ "quote": "hello", "answer": 42, "flag": true, "none": null });
/// assert!(std::ptr::eq(coerce(&object).unwrap(), &object));
///
/// let err = coerce(&Value::Array(vec![])).unwrap_err();
/// assert_eq!(err.to_string(), "Expected argument to be an object");
/// ```
///
/// # Errors
///
/// Returns [`Error::ArgumentKind`] if `value` is not an object, and
/// [`Error::ValueKind`] for the first property whose kind is not allowed.
pub fn coerce(value: &Value) -> Result<&Value> {
    let object = expect_object(value)?;

    for (prop, property) in object.iter() {
        let kind = property.kind();
        if !kind.is_allowed() {
            let rendered = property.to_string();
            debug!(prop = %prop, kind = %kind, value = %rendered, "rejected key-value property");
            return Err(Error::value_kind(prop, kind, &rendered));
        }
    }

    Ok(value)
}

/// Borrows the map out of an object value, or fails with [`Error::ArgumentKind`].
pub(crate) fn expect_object(value: &Value) -> Result<&KeyValueMap> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(Error::argument_kind(other.kind())),
    }
}
