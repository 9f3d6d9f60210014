//! JSON text decoder.

use crate::constants::{HEX_PREFIX, NULL, QUOTE};
use crate::number::{self, Grammar, Shape};
use crate::options::{CodecOptions, EmptyLiteralPolicy};
use crate::{DecodeError, NullableBigInt};

/// Decodes one JSON value into a [`NullableBigInt`].
///
/// Classification, in order:
/// 1. `null` is absent.
/// 2. A JSON string is unescaped, then read as `0x` hex or signed decimal.
/// 3. A bare token must be a JSON integer; fractions and exponents are
///    rejected rather than truncated.
///
/// Leading and trailing JSON whitespace is ignored.
pub fn decode_text(data: &[u8], options: &CodecOptions) -> Result<NullableBigInt, DecodeError> {
    let text = trim_whitespace(data);
    let result = decode_value(text, options);
    if let Err(err) = &result {
        tracing::debug!(
            kind = err.kind(),
            literal = %String::from_utf8_lossy(text),
            "rejected bigint text"
        );
    }
    result
}

fn decode_value(text: &[u8], options: &CodecOptions) -> Result<NullableBigInt, DecodeError> {
    if text == NULL {
        tracing::trace!("bigint text is null");
        return Ok(NullableBigInt::absent());
    }
    if text.first() == Some(&QUOTE) {
        let payload: String = serde_json::from_slice(text)?;
        return decode_payload(payload.as_bytes(), text, options);
    }
    decode_bare(text)
}

/// Reads the contents of a JSON string. `literal` is what error messages
/// report.
pub(crate) fn decode_payload(
    payload: &[u8],
    literal: &[u8],
    options: &CodecOptions,
) -> Result<NullableBigInt, DecodeError> {
    if let Some(digits) = payload.strip_prefix(HEX_PREFIX) {
        if digits.is_empty() {
            return empty_literal(options, || DecodeError::hex(literal));
        }
        if !number::is_hex_digits(digits) {
            return Err(DecodeError::hex(literal));
        }
        return number::parse_hex(digits)
            .map(NullableBigInt::from_big)
            .ok_or_else(|| DecodeError::hex(literal));
    }

    if payload.is_empty() {
        return empty_literal(options, || DecodeError::decimal(literal));
    }
    match number::classify(payload, Grammar::Lenient) {
        Shape::Integer => number::parse_decimal(payload)
            .map(NullableBigInt::from_big)
            .ok_or_else(|| DecodeError::decimal(literal)),
        Shape::Fraction => Err(DecodeError::fraction(literal)),
        Shape::Invalid => Err(DecodeError::decimal(literal)),
    }
}

pub(crate) fn decode_bare(text: &[u8]) -> Result<NullableBigInt, DecodeError> {
    match number::classify(text, Grammar::Strict) {
        Shape::Integer => number::parse_decimal(text)
            .map(NullableBigInt::from_big)
            .ok_or_else(|| DecodeError::decimal(text)),
        Shape::Fraction => Err(DecodeError::fraction(text)),
        // Well-formed JSON of another kind is a type mismatch; anything else
        // is a syntax error from the JSON parser itself.
        Shape::Invalid => match serde_json::from_slice::<serde_json::Value>(text) {
            Ok(_) => Err(DecodeError::decimal(text)),
            Err(err) => Err(err.into()),
        },
    }
}

fn empty_literal(
    options: &CodecOptions,
    reject: impl FnOnce() -> DecodeError,
) -> Result<NullableBigInt, DecodeError> {
    match options.empty_literal {
        EmptyLiteralPolicy::Absent => {
            tracing::trace!("empty bigint literal decoded as absent");
            Ok(NullableBigInt::absent())
        }
        EmptyLiteralPolicy::Reject => Err(reject()),
    }
}

fn trim_whitespace(data: &[u8]) -> &[u8] {
    let is_ws = |b: &u8| matches!(*b, b' ' | b'\t' | b'\n' | b'\r');
    let start = data.iter().position(|b| !is_ws(b)).unwrap_or(data.len());
    let end = data.iter().rposition(|b| !is_ws(b)).map_or(start, |x| x + 1);
    &data[start..end]
}
