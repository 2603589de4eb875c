use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsonx_rs::{decode, encode, DecoderOptions, EncoderOptions, NumberFormat};

const COMPLEX_JSON: &[u8] = br#"{
    "name": "Complex JSON for Benchmarking",
    "version": "1.0.0",
    "license": "MIT",
    "keywords": ["json", "decoder", "benchmark", "performance", "rust"],
    "repository": {"type": "git", "url": "https://example.com/jsonx_rs.git"},
    "users": [
        {"id": 101, "username": "alice", "active": true, "score": 98.25, "roles": ["admin", "editor"]},
        {"id": 102, "username": "bob", "active": false, "score": 71.5, "roles": ["viewer"]},
        {"id": 103, "username": "charlie", "active": true, "score": 88.125, "roles": ["editor", "contributor"]}
    ],
    "settings": {
        "theme": "dark",
        "notifications": {"email": true, "push": false, "sms": false},
        "pagination": {"pageSize": 20, "defaultSort": "createdAt"}
    },
    "matrix": [[1, 2, 3, 4, 5], [6, 7, 8, 9, 10], [11, 12, 13, 14, 15]],
    "empty_object": {},
    "empty_array": [],
    "nothing": null
}"#;

fn benchmark_decode(c: &mut Criterion) {
    let options = DecoderOptions::default();

    c.bench_function("decode_complex_json", |b| {
        b.iter(|| decode(black_box(COMPLEX_JSON), black_box(&options)).unwrap())
    });
}

fn benchmark_decode_integers(c: &mut Criterion) {
    let options = DecoderOptions {
        number_format: NumberFormat::Integer,
        ..Default::default()
    };

    c.bench_function("decode_complex_json_integers", |b| {
        b.iter(|| decode(black_box(COMPLEX_JSON), black_box(&options)).unwrap())
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let value = decode(COMPLEX_JSON, &DecoderOptions::default()).unwrap();
    let options = EncoderOptions::default();

    c.bench_function("encode_complex_json", |b| {
        b.iter(|| encode(black_box(&value), black_box(&options)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_decode,
    benchmark_decode_integers,
    benchmark_encode
);
criterion_main!(benches);
