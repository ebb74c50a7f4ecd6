//! # serde_keyvalue
//!
//! Validation, flattening and literal reconstruction for key-value objects.
//!
//! A key-value object is a flat map whose values are strings, numbers, booleans,
//! dates, nulls, arrays or objects. This crate provides the pieces needed to move
//! such objects across a serialization boundary:
//!
//! - [`coerce`] checks that every property holds an allowed kind and hands the
//!   object back untouched
//! - [`reconstruct`] builds an object from a parsed value literal, substituting
//!   variables
//! - [`flatten`] and [`unflatten`] turn array and object properties into compact
//!   JSON text and back, leaving scalars alone
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_keyvalue::{coerce, flatten, keyvalue, unflatten, Value};
//!
//! let record = keyvalue!({
//!     "id": "42",
//!     "user": { "id": "1", "name": "a" },
//!     "posts": [{ "id": "101" }, { "id": "102" }]
//! });
//!
//! coerce(&record).unwrap();
//!
//! let flat = flatten(&record).unwrap();
//! let object = flat.as_object().unwrap();
//! assert_eq!(object.get("user"), Some(&Value::from(r#"{"id":"1","name":"a"}"#)));
//! assert_eq!(object.get("posts"), Some(&Value::from(r#"[{"id":"101"},{"id":"102"}]"#)));
//!
//! assert_eq!(unflatten(&flat).unwrap(), record);
//! ```
//!
//! ## Literals
//!
//! ```rust
//! use serde_keyvalue::{parse_literal, reconstruct, KeyValueMap, Value};
//!
//! let token = parse_literal(r#"{ hello: "world", x: $key }"#).unwrap();
//!
//! let mut variables = KeyValueMap::new();
//! variables.insert("key".to_string(), Value::from("val"));
//!
//! let value = reconstruct(&token, Some(&variables)).unwrap();
//! assert_eq!(value.as_object().unwrap().get("x"), Some(&Value::from("val")));
//! ```
//!
//! ## Logging
//!
//! Rejections and per-property codec work are reported through [`tracing`] at
//! `debug` and `trace` level. The crate never installs a subscriber.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Every operation is pure: inputs are never mutated and no state is kept
//! - Errors are returned as [`Result`], never as panics

pub mod codec;
pub mod error;
pub mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod scalar;
pub mod validate;
pub mod value;

pub use codec::{decode, encode, flatten, is_encoded_value, unflatten};
pub use error::{Error, Result};
pub use literal::{reconstruct, LiteralToken, ObjectField};
pub use map::KeyValueMap;
pub use options::ScalarOptions;
pub use parser::parse_literal;
pub use scalar::KeyValueScalar;
pub use validate::coerce;
pub use value::{Number, Value, ValueKind};

/// Parses literal text and builds a key-value object from it.
///
/// # Examples
///
/// ```rust
/// use serde_keyvalue::{from_literal_str, Value};
///
/// let value = from_literal_str("{ n: 3, ok: true }", None).unwrap();
/// assert_eq!(value.as_object().unwrap().get("n"), Some(&Value::from(3)));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed text and [`Error::LiteralKind`] for
/// literals that are not flat objects.
pub fn from_literal_str(text: &str, variables: Option<&KeyValueMap>) -> Result<Value> {
    let token = parse_literal(text)?;
    reconstruct(&token, variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyvalue;

    #[test]
    fn test_flatten_roundtrip() {
        let record = keyvalue!({
            "title": "Hello, world!",
            "meta": { "views": 10, "tags": ["a", "b"] },
            "score": 4.5
        });

        let flat = flatten(&record).unwrap();
        assert!(flat
            .as_object()
            .unwrap()
            .values()
            .all(|v| !v.kind().is_container()));
        assert_eq!(unflatten(&flat).unwrap(), record);
    }

    #[test]
    fn test_from_literal_str() {
        let value = from_literal_str(r#"{ a: "b", c: null }"#, None).unwrap();
        assert_eq!(value, keyvalue!({ "a": "b", "c": null }));
    }
}
