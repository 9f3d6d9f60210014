//! JSON text encoder.

use crate::constants::{NULL, QUOTE};
use crate::NullableBigInt;

/// Encodes `value` as `null` or a quoted base-10 string. Never fails.
pub fn encode_text(value: &NullableBigInt) -> Vec<u8> {
    let mut out = Vec::new();
    write_text(value, &mut out);
    out
}

/// Appends the encoding of `value` to `out`.
pub fn write_text(value: &NullableBigInt, out: &mut Vec<u8>) {
    match value.as_big() {
        None => out.extend_from_slice(NULL),
        Some(magnitude) => {
            // Decimal digits and `-` never need JSON escaping.
            let digits = magnitude.to_str_radix(10);
            out.reserve(digits.len() + 2);
            out.push(QUOTE);
            out.extend_from_slice(digits.as_bytes());
            out.push(QUOTE);
        }
    }
}
