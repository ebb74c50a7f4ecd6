//! The key-value scalar descriptor.
//!
//! [`KeyValueScalar`] bundles the hooks a schema system needs to expose key-value
//! objects as a custom scalar: outgoing values and incoming variable values both
//! pass through [`coerce`](crate::coerce), and inline literals go through
//! [`reconstruct`](crate::reconstruct).
//!
//! ```rust
//! use serde_keyvalue::{KeyValueMap, KeyValueScalar, Value};
//!
//! let scalar = KeyValueScalar::default();
//! assert_eq!(scalar.type_defs(), "scalar KeyValue");
//!
//! let mut variables = KeyValueMap::new();
//! variables.insert("key".to_string(), Value::from("val"));
//!
//! let value = scalar
//!     .parse_literal_str(r#"{ hello: "world", x: $key }"#, Some(&variables))
//!     .unwrap();
//! assert_eq!(value.as_object().unwrap().get("x"), Some(&Value::from("val")));
//! ```

use crate::literal::{reconstruct, LiteralToken};
use crate::parser::parse_literal;
use crate::validate::coerce;
use crate::{KeyValueMap, Result, ScalarOptions, Value};

/// Name, description and conversion hooks of the key-value scalar.
#[derive(Clone, Debug, Default)]
pub struct KeyValueScalar {
    options: ScalarOptions,
}

impl KeyValueScalar {
    #[must_use]
    pub fn new(options: ScalarOptions) -> Self {
        KeyValueScalar { options }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.options.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.options.description
    }

    /// Returns the schema definition of the scalar, e.g. `scalar KeyValue`.
    #[must_use]
    pub fn type_defs(&self) -> String {
        format!("scalar {}", self.options.name)
    }

    /// Validates a value on its way out to a consumer.
    ///
    /// # Errors
    ///
    /// See [`coerce`].
    pub fn serialize<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        coerce(value)
    }

    /// Validates a value supplied by a producer, such as a variable.
    ///
    /// # Errors
    ///
    /// See [`coerce`].
    pub fn parse_value<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        coerce(value)
    }

    /// Builds a value from an inline literal.
    ///
    /// # Errors
    ///
    /// See [`reconstruct`].
    pub fn parse_literal(
        &self,
        token: &LiteralToken,
        variables: Option<&KeyValueMap>,
    ) -> Result<Value> {
        reconstruct(token, variables)
    }

    /// Parses literal text, then builds a value from it.
    ///
    /// # Errors
    ///
    /// Returns a syntax error from [`parse_literal`], or an error from [`reconstruct`].
    pub fn parse_literal_str(&self, text: &str, variables: Option<&KeyValueMap>) -> Result<Value> {
        let token = parse_literal(text)?;
        self.parse_literal(&token, variables)
    }
}
