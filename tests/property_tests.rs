//! Property-based tests for the flatten/unflatten laws, validation identity and
//! literal printing/parsing.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde_keyvalue::{
    coerce, flatten, parse_literal, reconstruct, unflatten, KeyValueMap, LiteralToken,
    ObjectField, Value,
};

/// Strings that can never be mistaken for encoded JSON.
fn plain_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?'-]{0,12}"
}

/// Numbers that print and parse back exactly.
fn exact_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(Value::from),
        (-4000i32..4000).prop_map(|n| Value::from(f64::from(n) / 4.0)),
    ]
}

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        exact_number(),
        plain_string().prop_map(Value::from),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn date() -> impl Strategy<Value = Value> {
    (0i64..4_000_000_000).prop_map(|secs| Value::Date(Utc.timestamp_opt(secs, 0).unwrap()))
}

fn scalar_property() -> impl Strategy<Value = Value> {
    prop_oneof![json_leaf(), date()]
}

fn key_value_object() -> impl Strategy<Value = Value> {
    prop::collection::vec(
        ("[a-zA-Z ]{1,10}", prop_oneof![scalar_property(), json_value()]),
        0..8,
    )
    .prop_map(|entries| Value::Object(entries.into_iter().collect::<KeyValueMap>()))
}

fn field_name() -> impl Strategy<Value = String> {
    "[_a-zA-Z][_a-zA-Z0-9]{0,8}"
}

fn scalar_token() -> impl Strategy<Value = LiteralToken> {
    prop_oneof![
        any::<String>().prop_map(LiteralToken::String),
        any::<i32>().prop_map(|n| LiteralToken::Int(n.to_string())),
        any::<bool>().prop_map(LiteralToken::Boolean),
        Just(LiteralToken::Null),
        field_name().prop_map(LiteralToken::Variable),
    ]
}

proptest! {
    #[test]
    fn prop_unflatten_inverts_flatten(object in key_value_object()) {
        let flat = flatten(&object).unwrap();
        prop_assert_eq!(unflatten(&flat).unwrap(), object);
    }

    #[test]
    fn prop_flatten_inverts_unflatten_on_flat_objects(object in key_value_object()) {
        let flat = flatten(&object).unwrap();
        let again = flatten(&unflatten(&flat).unwrap()).unwrap();
        prop_assert_eq!(again, flat);
    }

    #[test]
    fn prop_flatten_output_has_no_containers(object in key_value_object()) {
        let flat = flatten(&object).unwrap();
        prop_assert!(flat.as_object().unwrap().values().all(|v| !v.kind().is_container()));
    }

    #[test]
    fn prop_flatten_keeps_scalar_objects(
        entries in prop::collection::vec(("[a-z]{1,6}", scalar_property()), 0..8)
    ) {
        let object = Value::Object(entries.into_iter().collect());
        prop_assert_eq!(flatten(&object).unwrap(), object);
    }

    #[test]
    fn prop_coerce_returns_same_reference(object in key_value_object()) {
        let result = coerce(&object).unwrap();
        prop_assert!(std::ptr::eq(result, &object));
    }

    #[test]
    fn prop_printed_literal_parses_back(
        fields in prop::collection::vec((field_name(), scalar_token()), 0..6)
    ) {
        let token = LiteralToken::Object(
            fields.into_iter().map(|(name, value)| ObjectField { name, value }).collect(),
        );
        let parsed = parse_literal(&token.to_string()).unwrap();
        prop_assert_eq!(&parsed, &token);

        let value = reconstruct(&parsed, None).unwrap();
        let expected = reconstruct(&token, None).unwrap();
        prop_assert_eq!(
            value.as_object().unwrap().len(),
            expected.as_object().unwrap().len()
        );
    }
}
