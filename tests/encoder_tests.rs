use jsonx_rs::{
    decode, encode, encode_to_string, to_value, DecoderOptions, EncodeError, EncoderOptions,
    Number, Object, Value,
};
use std::collections::BTreeMap;

fn encode_default(value: &Value) -> String {
    encode_to_string(value, &EncoderOptions::default()).unwrap()
}

#[test]
fn encode_compact_output() {
    let value = Value::Array(vec![
        Value::Null,
        Value::Boolean(false),
        Value::from(2.5),
        Value::from("s"),
        Value::Array(vec![]),
        Value::Object(Object::new()),
    ]);
    assert_eq!(encode_default(&value), r#"[null,false,2.5,"s",[],{}]"#);
}

#[test]
fn encode_nested_reencodes_equivalently() {
    let input = br#"{ "a" : [ 1 , { "b" : true } ] }"#;
    let value = decode(input, &DecoderOptions::default()).unwrap();
    let out = encode(&value, &EncoderOptions::default()).unwrap();
    assert_eq!(out, br#"{"a":[1,{"b":true}]}"#);

    let ours: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let theirs: serde_json::Value = serde_json::from_slice(input).unwrap();
    assert_eq!(ours, theirs);
}

#[test]
fn encode_numbers_without_exponent() {
    assert_eq!(encode_default(&Value::from(1.5e22)), "15000000000000000000000");
    assert_eq!(encode_default(&Value::from(0.000125)), "0.000125");
    assert_eq!(
        encode_default(&Value::Number(Number::Integer(i64::MAX))),
        "9223372036854775807"
    );
}

#[test]
fn encode_rejects_non_finite() {
    let value = Value::Array(vec![Value::from(f64::NEG_INFINITY)]);
    assert_eq!(
        encode(&value, &EncoderOptions::default()),
        Err(EncodeError::NonFiniteNumber(f64::NEG_INFINITY))
    );
}

#[test]
fn encode_external_values() {
    #[derive(serde::Serialize)]
    struct Config {
        name: &'static str,
        retries: u8,
        tags: Vec<&'static str>,
    }

    let value = to_value(&Config {
        name: "svc",
        retries: 3,
        tags: vec!["a"],
    })
    .unwrap();
    let text = encode_to_string(&value, &EncoderOptions::default()).unwrap();
    let reparsed = decode(text.as_bytes(), &DecoderOptions::default()).unwrap();
    assert_eq!(reparsed.get("name"), Some(&Value::from("svc")));
    assert_eq!(reparsed.get("retries"), Some(&Value::from(3.0)));
}

#[test]
fn encode_external_map_with_non_string_keys() {
    let mut map = BTreeMap::new();
    map.insert((1, 2), "pair");
    assert_eq!(to_value(&map), Err(EncodeError::KeyMustBeString));
}
