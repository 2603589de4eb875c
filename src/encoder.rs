//! Value tree to compact JSON encoder

use crate::common::{
    COLON, COMMA, FALSE, LEFT_BRACE, LEFT_BRACKET, NULL, QUOTE, RIGHT_BRACE, RIGHT_BRACKET, TRUE,
};
use crate::error::EncodeError;
use crate::value::{Number, Object, Value};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Encoder configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Write NaN and infinities as `null` instead of failing (default: false)
    pub non_finite_as_null: bool,
}

/// Encode a value as compact JSON.
///
/// Strings are written between quotes exactly as stored, without escaping.
/// Object members come out in the map's iteration order.
pub fn encode(value: &Value, options: &EncoderOptions) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = Encoder::new(options);
    match encoder.encode_value(value) {
        Ok(()) => {
            trace!(len = encoder.output.len(), "encoded JSON document");
            Ok(encoder.output)
        }
        Err(err) => {
            debug!(error = %err, "JSON encode failed");
            Err(err)
        }
    }
}

/// [`encode`], returning text
pub fn encode_to_string(value: &Value, options: &EncoderOptions) -> Result<String, EncodeError> {
    let bytes = encode(value, options)?;
    // Only whole `str`s and ASCII are ever written
    String::from_utf8(bytes).map_err(|err| EncodeError::Unsupported(err.to_string()))
}

struct Encoder<'a> {
    options: &'a EncoderOptions,
    output: Vec<u8>,
}

impl<'a> Encoder<'a> {
    fn new(options: &'a EncoderOptions) -> Self {
        Self {
            options,
            output: Vec::new(),
        }
    }

    fn encode_value(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Null => self.output.extend_from_slice(NULL),
            Value::Boolean(true) => self.output.extend_from_slice(TRUE),
            Value::Boolean(false) => self.output.extend_from_slice(FALSE),
            Value::Number(n) => self.encode_number(*n)?,
            Value::String(s) => self.encode_string(s),
            Value::Array(arr) => self.encode_array(arr)?,
            Value::Object(obj) => self.encode_object(obj)?,
        }
        Ok(())
    }

    fn encode_array(&mut self, arr: &[Value]) -> Result<(), EncodeError> {
        self.output.push(LEFT_BRACKET);
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.output.push(COMMA);
            }
            self.encode_value(item)?;
        }
        self.output.push(RIGHT_BRACKET);
        Ok(())
    }

    fn encode_object(&mut self, obj: &Object) -> Result<(), EncodeError> {
        self.output.push(LEFT_BRACE);
        for (i, (key, item)) in obj.iter().enumerate() {
            if i > 0 {
                self.output.push(COMMA);
            }
            self.encode_string(key);
            self.output.push(COLON);
            self.encode_value(item)?;
        }
        self.output.push(RIGHT_BRACE);
        Ok(())
    }

    fn encode_string(&mut self, s: &str) {
        self.output.reserve(s.len() + 2);
        self.output.push(QUOTE);
        self.output.extend_from_slice(s.as_bytes());
        self.output.push(QUOTE);
    }

    /// Shortest decimal that reads back to the same float; never scientific notation
    fn encode_number(&mut self, n: Number) -> Result<(), EncodeError> {
        match n {
            Number::Integer(i) => self.output.extend_from_slice(i.to_string().as_bytes()),
            Number::Unsigned(u) => self.output.extend_from_slice(u.to_string().as_bytes()),
            Number::Float(f) if f.is_finite() => {
                self.output.extend_from_slice(f.to_string().as_bytes())
            }
            Number::Float(_) if self.options.non_finite_as_null => {
                self.output.extend_from_slice(NULL)
            }
            Number::Float(f) => return Err(EncodeError::NonFiniteNumber(f)),
        }
        Ok(())
    }
}
