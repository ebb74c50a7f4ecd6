//! Parse a value literal and rebuild it as a key-value object.
//!
//! Run with: `cargo run --example literal`

use serde_keyvalue::{KeyValueMap, KeyValueScalar, ScalarOptions, Value};

fn main() {
    let scalar = KeyValueScalar::new(ScalarOptions::new().with_name("KeyValue"));
    println!("{}", scalar.type_defs());

    let mut variables = KeyValueMap::new();
    variables.insert("key".to_string(), Value::from("somethingValue"));

    let literal = r#"{
      somethingString: "Words win wars",
      somethingNumber: 42,
      somethingBool: false,
      somethingNull: null,
      somethingVar: $key,
    }"#;

    match scalar.parse_literal_str(literal, Some(&variables)) {
        Ok(value) => println!("Reconstructed: {}", value),
        Err(err) => eprintln!("Error: {}", err),
    }

    match scalar.parse_literal_str("{ nested: { not: \"allowed\" } }", None) {
        Ok(value) => println!("Reconstructed: {}", value),
        Err(err) => println!("Rejected: {}", err),
    }
}
