//! Nullable arbitrary-precision integer with JSON and SQL scalar codecs.
//!
//! [`NullableBigInt`] holds either nothing (absent) or an exact
//! [`num_bigint::BigInt`]. It converts to and from:
//!
//! - JSON text: [`json::decode_text`] / [`json::encode_text`], plus serde
//!   `Serialize`/`Deserialize`;
//! - database scalars: [`sql::scan`] / [`sql::to_sql_value`];
//! - a readable float: [`NullableBigInt::to_approx_f64`].
//!
//! How absence crosses each boundary is controlled by [`CodecOptions`].

mod constants;
mod error;
mod int;
mod number;
mod options;
mod readable;
mod serde_impl;

pub mod json;
pub mod sql;

pub use error::DecodeError;
pub use int::NullableBigInt;
pub use json::JsonBigIntCodec;
pub use options::{AbsentScalarPolicy, CodecOptions, EmptyLiteralPolicy};
pub use sql::{FromSqlValue, SqlValue, ToSqlValue};

pub use num_bigint::BigInt;
