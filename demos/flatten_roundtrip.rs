//! Flatten a nested record into scalar-only properties and back.
//!
//! Run with: `cargo run --example flatten_roundtrip`

use serde_keyvalue::{coerce, flatten, keyvalue, unflatten};

fn main() {
    let record = keyvalue!({
        "quote": "Wait a minute Doc, are you telling me you built a time machine... out of a Delorean?",
        "answerToLifeUniverseEtc": 42,
        "this statement is false": true,
        "user": { "id": "1", "name": "jdrydn", "url": "https://jdrydn.com" },
        "posts": [
            { "id": "101", "title": "Hello, world!" },
            { "id": "102", "title": "This is the way!" }
        ]
    });

    coerce(&record).expect("record holds only allowed kinds");

    let flat = flatten(&record).expect("record is an object");
    println!("=== Flattened ===");
    for (key, value) in flat.as_object().into_iter().flatten() {
        println!("{}: {}", key, value);
    }

    let restored = unflatten(&flat).expect("flattened text decodes");
    println!("\nRound trip equal: {}", restored == record);

    // Strings that only look like JSON are decoded too.
    let ambiguous = keyvalue!({ "note": "[literally this]" });
    match unflatten(&ambiguous) {
        Ok(value) => println!("\nDecoded: {}", value),
        Err(err) => println!("\nBracketed plain string rejected: {}", err),
    }
}
