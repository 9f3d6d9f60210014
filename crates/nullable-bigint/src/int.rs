//! [`NullableBigInt`]: an arbitrary-precision integer that may be absent.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::DecodeError;
use crate::number::{self, Grammar, Shape};

/// Arbitrary-precision signed integer with a distinct "no value" state.
///
/// Absent and zero are different values: `null` decodes to absent, and
/// absent encodes back to `null`. Arithmetic goes through the wrapped
/// [`BigInt`], reached with [`as_big_mut`](Self::as_big_mut) or
/// [`ensure_value`](Self::ensure_value).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NullableBigInt {
    value: Option<BigInt>,
}

impl NullableBigInt {
    pub const fn absent() -> Self {
        Self { value: None }
    }

    pub fn from_i64(value: i64) -> Self {
        Self::from_big(BigInt::from(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_big(BigInt::from(value))
    }

    pub fn from_big(value: BigInt) -> Self {
        Self { value: Some(value) }
    }

    /// Deep copy. The result owns its own magnitude; copying an absent value
    /// yields an absent value.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Replaces an absent value with zero and returns the magnitude.
    pub fn ensure_value(&mut self) -> &mut BigInt {
        self.value.get_or_insert_with(BigInt::zero)
    }

    pub fn as_big(&self) -> Option<&BigInt> {
        self.value.as_ref()
    }

    pub fn as_big_mut(&mut self) -> Option<&mut BigInt> {
        self.value.as_mut()
    }

    /// The magnitude, or zero when absent. Leaves `self` untouched.
    pub fn to_big_int(&self) -> BigInt {
        self.value.clone().unwrap_or_default()
    }

    pub fn into_inner(self) -> Option<BigInt> {
        self.value
    }
}

impl From<BigInt> for NullableBigInt {
    fn from(value: BigInt) -> Self {
        Self::from_big(value)
    }
}

impl From<Option<BigInt>> for NullableBigInt {
    fn from(value: Option<BigInt>) -> Self {
        Self { value }
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NullableBigInt {
                fn from(value: $t) -> Self {
                    Self::from_big(BigInt::from(value))
                }
            }
        )*
    };
}

from_primitive!(i32, i64, u32, u64);

impl fmt::Display for NullableBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

/// Parses a plain base-10 literal (`-?[0-9]+`). No quotes, no hex, no `null`.
impl FromStr for NullableBigInt {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_plain_decimal(s.as_bytes())
    }
}

pub(crate) fn parse_plain_decimal(data: &[u8]) -> Result<NullableBigInt, DecodeError> {
    match number::classify(data, Grammar::Lenient) {
        Shape::Integer => number::parse_decimal(data)
            .map(NullableBigInt::from_big)
            .ok_or_else(|| DecodeError::decimal(data)),
        Shape::Fraction => Err(DecodeError::fraction(data)),
        Shape::Invalid => Err(DecodeError::decimal(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_cover_full_64_bit_range() {
        assert_eq!(
            NullableBigInt::from_i64(i64::MIN).to_string(),
            "-9223372036854775808"
        );
        assert_eq!(
            NullableBigInt::from_u64(u64::MAX).to_string(),
            "18446744073709551615"
        );
        assert_eq!(NullableBigInt::from_u64(0), NullableBigInt::from_i64(0));
    }

    #[test]
    fn absent_is_not_zero() {
        let absent = NullableBigInt::absent();
        assert!(absent.is_absent());
        assert!(!NullableBigInt::from_i64(0).is_absent());
        assert_ne!(absent, NullableBigInt::from_i64(0));
        assert_eq!(absent, NullableBigInt::default());
        assert!(absent < NullableBigInt::from_i64(-1));
    }

    #[test]
    fn copy_is_isolated() {
        let mut a = NullableBigInt::from_i64(100);
        let b = a.copy();
        *a.ensure_value() += 100;
        assert_eq!(a, NullableBigInt::from_i64(200));
        assert_eq!(b, NullableBigInt::from_i64(100));
    }

    #[test]
    fn copy_of_absent_is_absent() {
        assert!(NullableBigInt::absent().copy().is_absent());
    }

    #[test]
    fn ensure_value_is_idempotent() {
        let mut once = NullableBigInt::absent();
        once.ensure_value();
        let mut twice = NullableBigInt::absent();
        twice.ensure_value();
        twice.ensure_value();
        assert_eq!(once, twice);
        assert_eq!(once, NullableBigInt::from_i64(0));

        let mut present = NullableBigInt::from_i64(7);
        present.ensure_value();
        assert_eq!(present, NullableBigInt::from_i64(7));
    }

    #[test]
    fn to_big_int_does_not_mutate() {
        let absent = NullableBigInt::absent();
        assert_eq!(absent.to_big_int(), BigInt::zero());
        assert!(absent.is_absent());
        assert_eq!(NullableBigInt::from_i64(1).to_big_int(), BigInt::from(1));
    }

    #[test]
    fn display_and_from_str() {
        assert_eq!(NullableBigInt::absent().to_string(), "null");
        assert_eq!(NullableBigInt::from_i64(-5).to_string(), "-5");
        let parsed: NullableBigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(parsed.to_string(), "123456789012345678901234567890");
        assert!(matches!(
            "1.5".parse::<NullableBigInt>(),
            Err(DecodeError::UnsupportedFraction { .. })
        ));
        assert!(matches!(
            "+1".parse::<NullableBigInt>(),
            Err(DecodeError::MalformedDecimal { .. })
        ));
        assert!(matches!(
            "1_0".parse::<NullableBigInt>(),
            Err(DecodeError::MalformedDecimal { .. })
        ));
    }
}
