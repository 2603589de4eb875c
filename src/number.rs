//! Numeric literal reconstruction
//!
//! The decoder collects the digits of a literal (plus at most one `.`)
//! into a staging buffer and records the leading `-` separately. A
//! [`NumberFormat`] turns that payload into a [`Number`].

use crate::common::DOT;
use crate::value::Number;
use serde::{Deserialize, Serialize};

/// Powers of ten up to 10^31
const POW10: [f64; 32] = [
    1e00, 1e01, 1e02, 1e03, 1e04, 1e05, 1e06, 1e07, 1e08, 1e09, 1e10, 1e11, 1e12, 1e13, 1e14,
    1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 1e23, 1e24, 1e25, 1e26, 1e27, 1e28, 1e29,
    1e30, 1e31,
];

/// 10^n, clamped to the largest tabulated power
#[inline]
fn pow10(n: usize) -> f64 {
    POW10[n.min(POW10.len() - 1)]
}

/// Policy mapping a digit staging buffer and sign flag to a [`Number`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// 64-bit float, rebuilt right to left from the digit buffer (default)
    #[default]
    Float,
    /// `i64`; fractional digits are truncated, overflow fails the decode
    Integer,
    /// Caller-supplied conversion. Returning `None` fails the decode.
    #[serde(skip)]
    Custom(fn(&[u8], bool) -> Option<Number>),
}

impl NumberFormat {
    /// Convert one staging buffer. `digits` holds ASCII digits and at most one `.`.
    pub(crate) fn format(&self, digits: &[u8], negative: bool) -> Option<Number> {
        match self {
            NumberFormat::Float => Some(Number::Float(digits_to_f64(digits, negative))),
            NumberFormat::Integer => digits_to_i64(digits, negative).map(Number::Integer),
            NumberFormat::Custom(convert) => convert(digits, negative),
        }
    }
}

/// Single right-to-left sweep: each digit adds `d * 10^exponent`; the
/// decimal point rescales everything gathered so far into the fraction
/// and restarts the exponent for the integral part.
fn digits_to_f64(digits: &[u8], negative: bool) -> f64 {
    let mut exponent = 0;
    let mut value = 0.0;

    for &byte in digits.iter().rev() {
        if byte == DOT {
            value /= pow10(exponent);
            exponent = 0;
        } else {
            value += f64::from(byte - b'0') * pow10(exponent);
            exponent += 1;
        }
    }

    if negative {
        -value
    } else {
        value
    }
}

fn digits_to_i64(digits: &[u8], negative: bool) -> Option<i64> {
    let integral = digits.split(|&byte| byte == DOT).next().unwrap_or_default();

    // Accumulate with the final sign so i64::MIN stays reachable
    integral.iter().try_fold(0i64, |acc, &byte| {
        let digit = i64::from(byte - b'0');
        let shifted = acc.checked_mul(10)?;
        if negative {
            shifted.checked_sub(digit)
        } else {
            shifted.checked_add(digit)
        }
    })
}
