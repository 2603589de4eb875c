use jsonx_rs::{encode_to_string, EncoderOptions, Number, Object, Value};

fn main() {
    println!("=== Value to JSON Examples ===\n");

    // Example 1: Scalars
    println!("1. Scalars:");
    for value in [
        Value::Null,
        Value::Boolean(true),
        Value::from(42.0),
        Value::from(-0.5),
        Value::Number(Number::Integer(-7)),
        Value::from("text"),
    ] {
        println!("{}", encode_to_string(&value, &EncoderOptions::default()).unwrap());
    }
    println!();

    // Example 2: Nested containers
    println!("2. Nested containers:");
    let mut user = Object::new();
    user.insert("id".to_string(), Value::from(123));
    user.insert("name".to_string(), Value::from("Bob"));
    user.insert(
        "roles".to_string(),
        Value::Array(vec![Value::from("admin"), Value::from("user")]),
    );
    let mut root = Object::new();
    root.insert("user".to_string(), Value::Object(user));
    root.insert("empty".to_string(), Value::Array(vec![]));
    println!(
        "{}\n",
        encode_to_string(&Value::Object(root), &EncoderOptions::default()).unwrap()
    );

    // Example 3: Non-finite numbers
    println!("3. Non-finite numbers:");
    let data = Value::Array(vec![Value::from(1.5), Value::from(f64::NAN)]);
    match encode_to_string(&data, &EncoderOptions::default()) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("default options: {}", err),
    }
    let options = EncoderOptions {
        non_finite_as_null: true,
    };
    println!(
        "non_finite_as_null: {}",
        encode_to_string(&data, &options).unwrap()
    );
}
