use jsonx_rs::{decode, encode, DecoderOptions, EncoderOptions};

fn main() {
    println!("=== JSON Round-Trip Examples ===\n");

    let documents: [&[u8]; 4] = [
        br#"{"name": "Alice", "age": 30, "active": true}"#,
        br#"{"user": {"profile": {"name": "Bob"}, "tags": ["a", "b"]}}"#,
        b"[\n  1,\n  2.5,\n  -3,\n  null\n]",
        br#"{"matrix": [[1, 2], [3, 4]], "empty": {}}"#,
    ];

    for (i, input) in documents.iter().enumerate() {
        println!("Example {}", i + 1);
        println!("Original: {}", String::from_utf8_lossy(input));

        let value = decode(input, &DecoderOptions::default()).unwrap();
        let encoded = encode(&value, &EncoderOptions::default()).unwrap();
        println!("Encoded:  {}", String::from_utf8_lossy(&encoded));

        let decoded = decode(&encoded, &DecoderOptions::default()).unwrap();
        assert_eq!(value, decoded, "Round-trip failed!");

        let original: serde_json::Value = serde_json::from_slice(input).unwrap();
        let reencoded: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
        println!("Equivalent JSON: {}\n", original == reencoded);
    }
}
