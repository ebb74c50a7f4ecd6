/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals; any other leaf is converted with
/// `Value::from`, so variables and expressions in parentheses work too.
///
/// ```rust
/// use serde_keyvalue::{keyvalue, Value};
///
/// let name = "Alice";
/// let value = keyvalue!({
///     "name": name,
///     "tags": ["rust", "serde"],
///     "manager": null
/// });
///
/// let object = value.as_object().unwrap();
/// assert_eq!(object.get("name"), Some(&Value::from("Alice")));
/// assert!(object.get("tags").unwrap().is_array());
/// ```
#[macro_export]
macro_rules! keyvalue {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::keyvalue!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::KeyValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::KeyValueMap::new();
        $(
            object.insert($key.to_string(), $crate::keyvalue!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{KeyValueMap, Number, Value};

    #[test]
    fn test_keyvalue_macro_primitives() {
        assert_eq!(keyvalue!(null), Value::Null);
        assert_eq!(keyvalue!(true), Value::Bool(true));
        assert_eq!(keyvalue!(false), Value::Bool(false));
        assert_eq!(keyvalue!(42), Value::Number(Number::Integer(42)));
        assert_eq!(keyvalue!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(keyvalue!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_keyvalue_macro_arrays() {
        assert_eq!(keyvalue!([]), Value::Array(vec![]));
        assert_eq!(
            keyvalue!([1, "two", null]),
            Value::Array(vec![Value::from(1), Value::from("two"), Value::Null])
        );
    }

    #[test]
    fn test_keyvalue_macro_objects() {
        assert_eq!(keyvalue!({}), Value::Object(KeyValueMap::new()));

        let obj = keyvalue!({
            "name": "Alice",
            "nested": { "age": 30 }
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::from("Alice")));
                assert_eq!(
                    map.get("nested").and_then(|v| v.as_object()).and_then(|o| o.get("age")),
                    Some(&Value::from(30))
                );
            }
            _ => panic!("Expected object"),
        }
    }
}
