//! Integer literal classification.
//!
//! Every literal is checked here before it reaches `num_bigint`, whose own
//! parser also accepts a leading `+` and `_` digit separators.

use num_bigint::BigInt;

/// Shape of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// `-?digits`
    Integer,
    /// A well-formed number with a fraction and/or exponent part.
    Fraction,
    Invalid,
}

/// Integer-part rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Grammar {
    /// RFC 8259: no leading zeros.
    Strict,
    /// Any run of digits.
    Lenient,
}

fn skip_digits(data: &[u8], mut x: usize) -> usize {
    while x < data.len() && data[x].is_ascii_digit() {
        x += 1;
    }
    x
}

pub(crate) fn classify(data: &[u8], grammar: Grammar) -> Shape {
    let len = data.len();
    let mut x = usize::from(data.first() == Some(&b'-'));

    let int_start = x;
    x = skip_digits(data, x);
    let int_len = x - int_start;
    if int_len == 0 {
        return Shape::Invalid;
    }
    if grammar == Grammar::Strict && int_len > 1 && data[int_start] == b'0' {
        return Shape::Invalid;
    }

    let mut fractional = false;
    if x < len && data[x] == b'.' {
        let start = x + 1;
        x = skip_digits(data, start);
        if x == start {
            return Shape::Invalid;
        }
        fractional = true;
    }
    if x < len && (data[x] == b'e' || data[x] == b'E') {
        x += 1;
        if x < len && (data[x] == b'+' || data[x] == b'-') {
            x += 1;
        }
        let start = x;
        x = skip_digits(data, start);
        if x == start {
            return Shape::Invalid;
        }
        fractional = true;
    }

    match (x == len, fractional) {
        (false, _) => Shape::Invalid,
        (true, true) => Shape::Fraction,
        (true, false) => Shape::Integer,
    }
}

/// Parses a literal already classified as [`Shape::Integer`].
pub(crate) fn parse_decimal(data: &[u8]) -> Option<BigInt> {
    BigInt::parse_bytes(data, 10)
}

pub(crate) fn is_hex_digits(data: &[u8]) -> bool {
    !data.is_empty() && data.iter().all(u8::is_ascii_hexdigit)
}

/// Parses unsigned hex digits validated by [`is_hex_digits`].
pub(crate) fn parse_hex(data: &[u8]) -> Option<BigInt> {
    BigInt::parse_bytes(data, 16)
}
