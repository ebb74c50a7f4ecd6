use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_keyvalue::{coerce, flatten, from_literal_str, keyvalue, unflatten, KeyValueMap, Value};

fn record(posts: usize) -> Value {
    let list = (0..posts)
        .map(|i| keyvalue!({ "id": (i.to_string()), "title": "Hello, world!" }))
        .collect::<Vec<_>>();

    let mut object = KeyValueMap::new();
    object.insert("quote".to_string(), Value::from("This is the way!"));
    object.insert("answer".to_string(), Value::from(42));
    object.insert("user".to_string(), keyvalue!({ "id": "1", "name": "a" }));
    object.insert("posts".to_string(), Value::Array(list));
    Value::Object(object)
}

fn benchmark_coerce(c: &mut Criterion) {
    let value = record(10);
    c.bench_function("coerce", |b| b.iter(|| coerce(black_box(&value)).is_ok()));
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for size in [10, 100, 500].iter() {
        let value = record(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| flatten(black_box(value)))
        });
    }

    group.finish();
}

fn benchmark_unflatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("unflatten");

    for size in [10, 100, 500].iter() {
        let flat = flatten(&record(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &flat, |b, flat| {
            b.iter(|| unflatten(black_box(flat)))
        });
    }

    group.finish();
}

fn benchmark_literal(c: &mut Criterion) {
    let text = r#"{
      somethingString: "Words win wars",
      somethingNumber: 42,
      somethingBool: false,
      somethingNull: null,
      somethingVar: $key,
    }"#;
    let mut variables = KeyValueMap::new();
    variables.insert("key".to_string(), Value::from("somethingValue"));

    c.bench_function("parse_and_reconstruct", |b| {
        b.iter(|| from_literal_str(black_box(text), Some(&variables)))
    });
}

criterion_group!(
    benches,
    benchmark_coerce,
    benchmark_flatten,
    benchmark_unflatten,
    benchmark_literal
);
criterion_main!(benches);
