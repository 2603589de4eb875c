//! JSON bytes to value tree
//!
//! Recursive descent straight over the input bytes. There is no token
//! stream: [`Decoder::compose`] reads one significant byte, decides the
//! shape of the value from it and recurses for nested containers. Any
//! failure anywhere aborts the whole decode.

use crate::common::{
    COLON, COMMA, DOT, FALSE, HYPHEN, LEFT_BRACE, LEFT_BRACKET, NULL, QUOTE, RIGHT_BRACE,
    RIGHT_BRACKET, TRUE,
};
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::number::NumberFormat;
use crate::value::{Array, Object, Value};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Decoder configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    /// How numeric literals become [`crate::Number`]s (default: Float)
    pub number_format: NumberFormat,
    /// Deepest allowed array/object nesting, `None` for unlimited (default: 128)
    pub max_depth: Option<usize>,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::Float,
            max_depth: Some(128),
        }
    }
}

/// Decode a JSON document.
///
/// Bytes after the first complete value are not examined.
pub fn decode(input: &[u8], options: &DecoderOptions) -> Result<Value, ParseError> {
    let mut decoder = Decoder::new(input, options);
    match decoder.compose() {
        Ok(value) => {
            trace!(len = input.len(), "decoded JSON document");
            Ok(value)
        }
        Err(err) => {
            debug!(offset = err.offset, "JSON decode failed");
            Err(err)
        }
    }
}

struct Decoder<'a> {
    cursor: Cursor<'a>,
    options: &'a DecoderOptions,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a [u8], options: &'a DecoderOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    fn error(&self) -> ParseError {
        ParseError {
            offset: self.cursor.offset(),
        }
    }

    /// Build whatever value starts at the next significant byte
    fn compose(&mut self) -> Result<Value, ParseError> {
        match self.cursor.next_significant() {
            LEFT_BRACKET => self.compose_array(),
            LEFT_BRACE => self.compose_object(),
            QUOTE => self.compose_string().map(Value::String),
            first @ (b'0'..=b'9' | HYPHEN) => self.compose_number(first),
            b't' => self.compose_literal(&TRUE[1..], Value::Boolean(true)),
            b'f' => self.compose_literal(&FALSE[1..], Value::Boolean(false)),
            b'n' => self.compose_literal(&NULL[1..], Value::Null),
            _ => Err(self.error()),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        match self.options.max_depth {
            Some(max) if self.depth > max => {
                debug!(max_depth = max, "JSON nesting depth limit exceeded");
                Err(self.error())
            }
            _ => Ok(()),
        }
    }

    fn compose_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut arr = Array::new();

        if self.cursor.peek_significant() == RIGHT_BRACKET {
            self.cursor.next_significant();
        } else {
            loop {
                arr.push(self.compose()?);
                match self.cursor.next_significant() {
                    COMMA => continue,
                    RIGHT_BRACKET => break,
                    _ => return Err(self.error()),
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    /// Later duplicate keys overwrite earlier ones
    fn compose_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut obj = Object::new();

        if self.cursor.peek_significant() == RIGHT_BRACE {
            self.cursor.next_significant();
        } else {
            loop {
                if self.cursor.next_significant() != QUOTE {
                    return Err(self.error());
                }
                let key = self.compose_string()?;

                if self.cursor.next_significant() != COLON {
                    return Err(self.error());
                }
                let value = self.compose()?;
                obj.insert(key, value);

                match self.cursor.next_significant() {
                    COMMA => continue,
                    RIGHT_BRACE => break,
                    _ => return Err(self.error()),
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(obj))
    }

    /// Everything up to the next `"` is taken verbatim; escapes are not interpreted.
    fn compose_string(&mut self) -> Result<String, ParseError> {
        // Measure first so the copy allocates exactly once
        let len = self.cursor.scan_until(QUOTE).ok_or_else(|| self.error())?;
        let mut bytes = Vec::with_capacity(len);
        bytes.extend_from_slice(self.cursor.take(len));
        // closing quote
        self.cursor.bump();

        String::from_utf8(bytes).map_err(|_| self.error())
    }

    fn compose_number(&mut self, first: u8) -> Result<Value, ParseError> {
        let negative = first == HYPHEN;
        let mut digits = Vec::new();
        if !negative {
            digits.push(first);
        }

        let mut seen_dot = false;
        loop {
            match self.cursor.bump() {
                byte @ b'0'..=b'9' => digits.push(byte),
                DOT if !seen_dot => {
                    seen_dot = true;
                    digits.push(DOT);
                }
                DOT | HYPHEN => return Err(self.error()),
                _ => {
                    // Hand the terminator back to the caller
                    self.cursor.step_back();
                    break;
                }
            }
        }

        if !digits.first().is_some_and(u8::is_ascii_digit) || digits.last() == Some(&DOT) {
            return Err(self.error());
        }

        self.options
            .number_format
            .format(&digits, negative)
            .map(Value::Number)
            .ok_or_else(|| self.error())
    }

    fn compose_literal(&mut self, rest: &[u8], value: Value) -> Result<Value, ParseError> {
        if self.cursor.eat_literal(rest) {
            Ok(value)
        } else {
            Err(self.error())
        }
    }
}
