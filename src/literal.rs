//! Literal tokens and reconstruction of key-value objects from them.
//!
//! A [`LiteralToken`] tree is the parsed form of a GraphQL-style value literal such
//! as `{ hello: "world", count: 3, who: $user }`. [`reconstruct`] turns the tree
//! into a native [`Value::Object`], substituting variables from an optional table.
//!
//! ```rust
//! use serde_keyvalue::{reconstruct, KeyValueMap, LiteralToken, ObjectField, Value};
//!
//! let token = LiteralToken::Object(vec![
//!     ObjectField::new("hello", LiteralToken::String("world".to_string())),
//!     ObjectField::new("x", LiteralToken::Variable("key".to_string())),
//! ]);
//!
//! let mut variables = KeyValueMap::new();
//! variables.insert("key".to_string(), Value::from("val"));
//!
//! let value = reconstruct(&token, Some(&variables)).unwrap();
//! let object = value.as_object().unwrap();
//! assert_eq!(object.get("hello"), Some(&Value::from("world")));
//! assert_eq!(object.get("x"), Some(&Value::from("val")));
//! ```

use crate::{Error, KeyValueMap, Number, Result, Value};
use std::fmt;
use tracing::{debug, trace};

/// A node in a parsed value literal.
///
/// Numeric payloads are kept as the raw text the parser saw.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralToken {
    String(String),
    Int(String),
    Float(String),
    Boolean(bool),
    Null,
    /// A reference to a named variable, without the leading `$`.
    Variable(String),
    Object(Vec<ObjectField>),
}

/// One `name: value` entry of an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: LiteralToken,
}

impl ObjectField {
    pub fn new(name: &str, value: LiteralToken) -> Self {
        ObjectField {
            name: name.to_string(),
            value,
        }
    }
}

/// Prints the token back as literal source, e.g. `{a: 1, b: "x"}`.
impl fmt::Display for LiteralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralToken::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            LiteralToken::Int(raw) | LiteralToken::Float(raw) => f.write_str(raw),
            LiteralToken::Boolean(b) => write!(f, "{}", b),
            LiteralToken::Null => f.write_str("null"),
            LiteralToken::Variable(name) => write!(f, "${}", name),
            LiteralToken::Object(fields) => {
                f.write_str("{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Builds a key-value object from an object literal.
///
/// Strings and booleans are copied, ints and floats both become
/// [`Number::Float`], and variables are looked up in `variables`. A variable that
/// is missing from the table, or any variable when no table is given, becomes
/// [`Value::Undefined`].
///
/// # Errors
///
/// Returns [`Error::LiteralKind`] if `token` is not an object literal, or if one of
/// its fields holds a nested object literal.
pub fn reconstruct(token: &LiteralToken, variables: Option<&KeyValueMap>) -> Result<Value> {
    let fields = match token {
        LiteralToken::Object(fields) => fields,
        other => {
            let literal = other.to_string();
            debug!(literal = %literal, "rejected non-object literal");
            return Err(Error::non_object_literal(&literal));
        }
    };

    let mut object = KeyValueMap::with_capacity(fields.len());

    for field in fields {
        let value = match &field.value {
            LiteralToken::String(s) => Value::String(s.clone()),
            LiteralToken::Boolean(b) => Value::Bool(*b),
            LiteralToken::Int(raw) | LiteralToken::Float(raw) => Value::Number(parse_number(raw)),
            LiteralToken::Null => Value::Null,
            LiteralToken::Variable(name) => match variables {
                Some(table) => table.get(name).cloned().unwrap_or_else(|| {
                    trace!(variable = %name, "variable missing from table");
                    Value::Undefined
                }),
                None => Value::Undefined,
            },
            nested @ LiteralToken::Object(_) => {
                let literal = nested.to_string();
                debug!(field = %field.name, literal = %literal, "rejected nested object literal");
                return Err(Error::unrepresentable_literal(&literal));
            }
        };
        object.insert(field.name.clone(), value);
    }

    Ok(Value::Object(object))
}

/// Reads a numeric payload as a double; unparseable text yields NaN.
fn parse_number(raw: &str) -> Number {
    Number::from_f64(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
}
