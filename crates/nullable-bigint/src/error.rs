//! Decode error type shared by the text and database adapters.

use thiserror::Error;

/// Reasons a byte sequence or database scalar could not become a
/// [`NullableBigInt`](crate::NullableBigInt).
///
/// Encoding never fails, so this is the only error type in the crate.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("bigint: can't convert hex {literal} to an integer")]
    MalformedHex { literal: String },
    #[error("bigint: can't convert {literal} to an integer")]
    MalformedDecimal { literal: String },
    #[error("bigint: fractional value {literal} is not an integer")]
    UnsupportedFraction { literal: String },
    #[error("bigint: can't convert {0} type to an integer")]
    UnsupportedSourceKind(&'static str),
    #[error("bigint: invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn hex(literal: &[u8]) -> Self {
        Self::MalformedHex {
            literal: String::from_utf8_lossy(literal).into_owned(),
        }
    }

    pub(crate) fn decimal(literal: &[u8]) -> Self {
        Self::MalformedDecimal {
            literal: String::from_utf8_lossy(literal).into_owned(),
        }
    }

    pub(crate) fn fraction(literal: &[u8]) -> Self {
        Self::UnsupportedFraction {
            literal: String::from_utf8_lossy(literal).into_owned(),
        }
    }

    /// Stable short name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedHex { .. } => "malformed_hex",
            Self::MalformedDecimal { .. } => "malformed_decimal",
            Self::UnsupportedFraction { .. } => "unsupported_fraction",
            Self::UnsupportedSourceKind(_) => "unsupported_source_kind",
            Self::Syntax(_) => "syntax",
        }
    }
}
