//! Error types for key-value validation, literal reconstruction and flattening.
//!
//! ## Error Categories
//!
//! - **Argument kind**: a top-level argument was not an object
//! - **Value kind**: a property held a value outside the allowed kinds
//! - **Literal kind**: a literal token could not be represented as a key-value object
//! - **Codec**: the JSON codec rejected a value or a string during flatten/unflatten
//! - **Syntax**: the literal parser met malformed input, with line/column information
//!
//! ## Examples
//!
//! ```rust
//! use serde_keyvalue::{coerce, Error, Value};
//!
//! let err = coerce(&Value::from("not-an-object")).unwrap_err();
//! assert!(matches!(err, Error::ArgumentKind { .. }));
//! assert_eq!(err.to_string(), "Expected argument to be an object");
//! ```

use crate::value::ValueKind;
use thiserror::Error;

/// Represents all errors raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The top-level argument was not an object.
    #[error("Expected argument to be an object")]
    ArgumentKind { found: ValueKind },

    /// A property value is outside the allowed kinds.
    #[error("Expected value to be a valid type, found \"{kind}\" (property \"{prop}\", value {value})")]
    ValueKind {
        prop: String,
        kind: ValueKind,
        value: String,
    },

    /// A literal token cannot be represented as a key-value object or value.
    #[error("KeyValue cannot represent {context}: {literal}")]
    LiteralKind {
        context: &'static str,
        literal: String,
    },

    /// Error from the JSON codec, passed through unchanged.
    #[error(transparent)]
    Codec(#[from] serde_json::Error),

    /// Syntax error in a value literal
    #[error("Syntax error at line {line}, column {col}: {msg}{suggestion}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        suggestion: String,
    },
}

impl Error {
    /// Creates an argument kind error for a non-object argument.
    pub fn argument_kind(found: ValueKind) -> Self {
        Error::ArgumentKind { found }
    }

    /// Creates a value kind error for the property `prop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_keyvalue::{Error, ValueKind};
    ///
    /// let err = Error::value_kind("callback", ValueKind::Function, "[Function: cb]");
    /// assert!(err.to_string().contains("found \"Function\""));
    /// assert!(err.to_string().contains("callback"));
    /// ```
    pub fn value_kind(prop: &str, kind: ValueKind, value: &str) -> Self {
        Error::ValueKind {
            prop: prop.to_string(),
            kind,
            value: value.to_string(),
        }
    }

    /// Creates a literal kind error for a root token that is not an object.
    pub fn non_object_literal(literal: &str) -> Self {
        Error::LiteralKind {
            context: "non-object value",
            literal: literal.to_string(),
        }
    }

    /// Creates a literal kind error for a field value that cannot be represented.
    pub fn unrepresentable_literal(literal: &str) -> Self {
        Error::LiteralKind {
            context: "value",
            literal: literal.to_string(),
        }
    }

    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_keyvalue::Error;
    ///
    /// let err = Error::syntax(3, 7, "unexpected character '?'");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            suggestion: String::new(),
        }
    }

    /// Creates a syntax error with a hint appended to the message.
    pub fn syntax_with_hint(line: usize, col: usize, msg: &str, hint: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            suggestion: format!("\nHelp: {}", hint),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
