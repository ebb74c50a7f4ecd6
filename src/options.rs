//! Configuration options for the key-value scalar descriptor.
//!
//! ## Examples
//!
//! ```rust
//! use serde_keyvalue::{KeyValueScalar, ScalarOptions};
//!
//! let options = ScalarOptions::new()
//!     .with_name("Metadata")
//!     .with_description("Free-form metadata attached to a record");
//! let scalar = KeyValueScalar::new(options);
//!
//! assert_eq!(scalar.type_defs(), "scalar Metadata");
//! ```

/// Name used when none is configured.
pub const DEFAULT_NAME: &str = "KeyValue";

/// Description used when none is configured.
pub const DEFAULT_DESCRIPTION: &str =
    "Represents a collection of key-values, supporting String/Number/Boolean/Date/Null types";

/// Configuration for a [`KeyValueScalar`](crate::KeyValueScalar).
///
/// # Examples
///
/// ```rust
/// use serde_keyvalue::ScalarOptions;
///
/// let options = ScalarOptions::new();
/// assert_eq!(options.name, "KeyValue");
///
/// let options = ScalarOptions::new().with_name("Attributes");
/// assert_eq!(options.name, "Attributes");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarOptions {
    pub name: String,
    pub description: String,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        ScalarOptions {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl ScalarOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scalar's type name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the scalar's description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}
