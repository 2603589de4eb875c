use jsonx_rs::{decode, DecoderOptions, NumberFormat};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn show(label: &str, input: &[u8], options: &DecoderOptions) {
    println!("{}", label);
    println!("JSON input: {}", String::from_utf8_lossy(input));
    match decode(input, options) {
        Ok(value) => println!("Decoded: {:?}\n", value),
        Err(err) => println!("Error: {}\n", err),
    }
}

fn main() {
    // RUST_LOG=debug shows where failing inputs were rejected
    init_tracing();

    println!("=== JSON Decode Examples ===\n");

    let options = DecoderOptions::default();
    show("1. Decode object:", br#"{"name": "Alice", "age": 30}"#, &options);
    show("2. Decode nested:", br#"{"a": [1, {"b": true}]}"#, &options);
    show("3. Decode numbers:", b"[123, -0.5, 3.14159, -42]", &options);
    show("4. Empty containers:", b"[[], {}]", &options);

    let integers = DecoderOptions {
        number_format: NumberFormat::Integer,
        ..Default::default()
    };
    show("5. Integer number policy:", b"[123, -0.5, 9.99]", &integers);

    show("6. Trailing comma:", b"[1,]", &options);
    show("7. Unterminated string:", b"\"unterminated", &options);
    show("8. Two decimal points:", b"1.2.3", &options);
}
