//! Human-readable float approximation of fixed-point magnitudes.

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::NullableBigInt;

/// Decimal digits past which any quotient falls below the smallest f64
/// subnormal (~4.9e-324).
const UNDERFLOW_DIGITS: u64 = 400;

impl NullableBigInt {
    /// Reads the magnitude as minor units with `scale` implied decimal places
    /// and returns `magnitude / 10^scale` as an `f64`.
    ///
    /// Absent values read as `0.0`. A `scale <= 0` converts the integer
    /// directly. The division is exact; only the final conversion rounds.
    pub fn to_approx_f64(&self, scale: i64) -> f64 {
        let Some(magnitude) = self.as_big() else {
            return 0.0;
        };
        if scale <= 0 {
            return magnitude.to_f64().unwrap_or_else(|| saturate(magnitude));
        }

        let Ok(exp) = usize::try_from(scale) else {
            return signed_zero(magnitude);
        };
        if exp as u64 > max_decimal_digits(magnitude) + UNDERFLOW_DIGITS {
            return signed_zero(magnitude);
        }

        let denom = num_traits::pow(BigInt::from(10u8), exp);
        BigRational::new(magnitude.clone(), denom)
            .to_f64()
            .unwrap_or_else(|| saturate(magnitude))
    }
}

fn max_decimal_digits(magnitude: &BigInt) -> u64 {
    // log10(2) ~= 0.30103
    magnitude.bits() * 30_103 / 100_000 + 1
}

fn signed_zero(magnitude: &BigInt) -> f64 {
    if magnitude.sign() == Sign::Minus {
        -0.0
    } else {
        0.0
    }
}

fn saturate(magnitude: &BigInt) -> f64 {
    if magnitude.sign() == Sign::Minus {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}
