//! # jsonx_rs
//!
//! A small JSON codec working directly on bytes.
//!
//! Decoding is a single recursive-descent pass over the input with no
//! separate tokenizer. Numeric literals are rebuilt from their digits by a
//! configurable [`NumberFormat`] (64-bit floats by default, `i64` on request).
//! Encoding writes compact JSON from the same [`Value`] tree.
//!
//! Strings are taken verbatim in both directions: backslash escapes are
//! neither interpreted on decode nor produced on encode.
//!
//! ## Example
//!
//! ```rust
//! use jsonx_rs::{decode, encode, DecoderOptions, EncoderOptions, Value};
//!
//! let value = decode(br#"{"a": [1, {"b": true}]}"#, &DecoderOptions::default()).unwrap();
//! assert_eq!(value.get("a").and_then(|a| a.index(0)), Some(&Value::from(1.0)));
//!
//! let bytes = encode(&value, &EncoderOptions::default()).unwrap();
//! assert_eq!(bytes, br#"{"a":[1,{"b":true}]}"#);
//!
//! assert!(decode(b"[1,]", &DecoderOptions::default()).is_err());
//! ```

mod common;
mod cursor;
mod decoder;
mod encoder;
mod error;
mod number;
mod value;

// Re-export public API
pub use decoder::{decode, DecoderOptions};
pub use encoder::{encode, encode_to_string, EncoderOptions};
pub use error::{EncodeError, ParseError};
pub use number::NumberFormat;
pub use value::{to_value, Array, Number, Object, Value};
