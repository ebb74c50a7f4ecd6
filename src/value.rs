//! Dynamic value representation for key-value objects.
//!
//! This module provides the [`Value`] enum, the runtime value that every operation in
//! this crate inspects, and [`ValueKind`], its structural classification.
//!
//! ## Core Types
//!
//! - [`Value`]: any runtime value a producer may hand over, including kinds that are
//!   not allowed in a key-value object (undefined, big integers, symbols, functions)
//! - [`Number`]: a numeric value, with the special values Infinity, -Infinity and NaN
//! - [`ValueKind`]: the kind tag of a value; Array, Object, Date and Null are distinct
//!
//! ## Classification
//!
//! ```rust
//! use serde_keyvalue::{Value, ValueKind};
//!
//! assert_eq!(Value::Null.kind(), ValueKind::Null);
//! assert_eq!(Value::Array(vec![]).kind(), ValueKind::Array);
//! assert!(ValueKind::Date.is_allowed());
//! assert!(!Value::function("cb").kind().is_allowed());
//! ```
//!
//! ## JSON encoding
//!
//! `Value` serializes the way a dynamic runtime stringifies its values: whole numbers
//! print without a fraction, non-finite numbers become `null`, dates become RFC 3339
//! strings, and undefined, symbol and function entries are dropped from objects (or
//! become `null` inside arrays). Big integers refuse to serialize.

use crate::KeyValueMap;
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Largest integer a double can hold exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A dynamically-typed runtime value.
///
/// # Examples
///
/// ```rust
/// use serde_keyvalue::{Value, Number};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(Value::Null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Undefined,
    Bool(bool),
    Number(Number),
    BigInt(BigInt),
    String(String),
    Date(DateTime<Utc>),
    /// An opaque symbol, identified by its description.
    Symbol(String),
    /// An opaque callable, identified by its name.
    Function(String),
    Array(Vec<Value>),
    Object(KeyValueMap),
}

/// The structural kind of a [`Value`].
///
/// Only String, Number, Boolean, Date, Null, Array and Object are allowed as
/// property values of a key-value object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Date,
    Null,
    Array,
    Object,
    Undefined,
    BigInt,
    Symbol,
    Function,
}

impl ValueKind {
    /// Returns the kind of `value`.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::String(_) => ValueKind::String,
            Value::Date(_) => ValueKind::Date,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Function(_) => ValueKind::Function,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if values of this kind may appear in a key-value object.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(
            self,
            ValueKind::String
                | ValueKind::Number
                | ValueKind::Boolean
                | ValueKind::Date
                | ValueKind::Null
                | ValueKind::Array
                | ValueKind::Object
        )
    }

    /// Returns `true` for the kinds that flatten encodes as text.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "String",
            ValueKind::Number => "Number",
            ValueKind::Boolean => "Boolean",
            ValueKind::Date => "Date",
            ValueKind::Null => "Null",
            ValueKind::Array => "Array",
            ValueKind::Object => "Object",
            ValueKind::Undefined => "Undefined",
            ValueKind::BigInt => "BigInt",
            ValueKind::Symbol => "Symbol",
            ValueKind::Function => "Function",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric value: an integer, a float, or a special value.
///
/// Equality is numeric, so `Integer(1) == Float(1.0)`; `NaN` equals nothing.
///
/// # Examples
///
/// ```rust
/// use serde_keyvalue::Number;
///
/// assert_eq!(Number::Integer(42), Number::Float(42.0));
/// assert_ne!(Number::NaN, Number::NaN);
/// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Builds a number from an `f64`, mapping non-finite values to the special variants.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if it is a whole number in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Integer(i) => serializer.serialize_i64(i),
            Number::Float(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(f as i64)
            }
            Number::Float(f) if f.is_finite() => serializer.serialize_f64(f),
            _ => serializer.serialize_unit(),
        }
    }
}

impl Value {
    /// Creates a symbol value with the given description.
    pub fn symbol(description: &str) -> Self {
        Value::Symbol(description.to_string())
    }

    /// Creates a function value with the given name.
    pub fn function(name: &str) -> Self {
        Value::Function(name.to_string())
    }

    /// Returns the structural kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        ValueKind::of(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&KeyValueMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns `true` for values that JSON has no representation for.
    /// They are dropped from objects and written as `null` in arrays.
    const fn is_json_absent(&self) -> bool {
        matches!(self, Value::Undefined | Value::Symbol(_) | Value::Function(_))
    }
}

/// Renders the value for diagnostics: JSON where JSON can express it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Symbol(desc) => write!(f, "Symbol({})", desc),
            Value::Function(name) if name.is_empty() => f.write_str("[Function (anonymous)]"),
            Value::Function(name) => write!(f, "[Function: {}]", name),
            Value::BigInt(bi) => write!(f, "{}n", bi),
            _ => match serde_json::to_string(self) {
                Ok(json) => f.write_str(&json),
                // a container holding a big integer
                Err(_) => write!(f, "[{}]", self.kind()),
            },
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null | Value::Undefined | Value::Symbol(_) | Value::Function(_) => {
                serializer.serialize_unit()
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::BigInt(_) => Err(<S::Error as serde::ser::Error>::custom(
                "Do not know how to serialize a BigInt",
            )),
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let len = obj.values().filter(|v| !v.is_json_absent()).count();
                let mut map = serializer.serialize_map(Some(len))?;
                for (k, v) in obj.iter().filter(|(_, v)| !v.is_json_absent()) {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Number(Number::Integer(value as i64)))
                } else {
                    Ok(Value::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from_f64(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = KeyValueMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from_f64(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<KeyValueMap> for Value {
    fn from(value: KeyValueMap) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
