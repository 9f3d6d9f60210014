//! Scan from and bind to [`SqlValue`].

use crate::int::parse_plain_decimal;
use crate::options::{AbsentScalarPolicy, CodecOptions};
use crate::{DecodeError, NullableBigInt};

use super::SqlValue;

/// Types that can be built from a scanned column.
pub trait FromSqlValue: Sized {
    fn from_sql_value(raw: &SqlValue) -> Result<Self, DecodeError>;
}

/// Types that can be bound as a query parameter.
pub trait ToSqlValue {
    fn to_sql_value(&self) -> SqlValue;
}

/// Converts a scanned column.
///
/// `NULL` is absent. Text and bytes must hold a plain base-10 integer.
/// Native integers are taken as-is. Floating point and boolean columns are
/// rejected instead of coerced.
pub fn scan(raw: &SqlValue) -> Result<NullableBigInt, DecodeError> {
    let result = match raw {
        SqlValue::Null => Ok(NullableBigInt::absent()),
        SqlValue::Text(text) => parse_plain_decimal(text.as_bytes()),
        SqlValue::Bytes(bytes) => parse_plain_decimal(bytes),
        SqlValue::Int32(v) => Ok(NullableBigInt::from(*v)),
        SqlValue::Int64(v) => Ok(NullableBigInt::from_i64(*v)),
        SqlValue::UInt32(v) => Ok(NullableBigInt::from(*v)),
        SqlValue::UInt64(v) => Ok(NullableBigInt::from_u64(*v)),
        SqlValue::Bool(_) | SqlValue::Float32(_) | SqlValue::Float64(_) => {
            Err(DecodeError::UnsupportedSourceKind(raw.kind()))
        }
    };
    if let Err(err) = &result {
        tracing::debug!(kind = err.kind(), source = raw.kind(), "rejected bigint column");
    }
    result
}

/// Converts `value` into a bound parameter: the decimal string, or the
/// representation `options.absent_scalar` selects for absence.
pub fn to_sql_value(value: &NullableBigInt, options: &CodecOptions) -> SqlValue {
    match value.as_big() {
        Some(magnitude) => SqlValue::Text(magnitude.to_str_radix(10)),
        None => match options.absent_scalar {
            AbsentScalarPolicy::Null => SqlValue::Null,
            AbsentScalarPolicy::Zero => SqlValue::Text("0".to_owned()),
        },
    }
}

impl NullableBigInt {
    /// Replaces `self` with the scanned value. On error `self` is unchanged.
    pub fn scan_in_place(&mut self, raw: &SqlValue) -> Result<(), DecodeError> {
        *self = scan(raw)?;
        Ok(())
    }

    pub fn to_sql_value_with(&self, options: &CodecOptions) -> SqlValue {
        to_sql_value(self, options)
    }
}

impl FromSqlValue for NullableBigInt {
    fn from_sql_value(raw: &SqlValue) -> Result<Self, DecodeError> {
        scan(raw)
    }
}

impl ToSqlValue for NullableBigInt {
    fn to_sql_value(&self) -> SqlValue {
        to_sql_value(self, &CodecOptions::default())
    }
}
