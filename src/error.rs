//! Error types for the decoder and encoder.

use thiserror::Error;

/// The input is not JSON this decoder accepts.
///
/// Every decode failure collapses to this one kind. `offset` only
/// points at the byte where decoding gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("JSON could not be parsed at byte {offset}")]
pub struct ParseError {
    pub offset: usize,
}

/// A value that has no compact JSON spelling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// NaN or an infinity, with `non_finite_as_null` off.
    #[error("cannot encode non-finite number {0}")]
    NonFiniteNumber(f64),
    /// A mapping keyed by something other than strings.
    #[error("object key must be a string")]
    KeyMustBeString,
    /// Any other value the encoder does not recognize.
    #[error("unsupported value: {0}")]
    Unsupported(String),
}
