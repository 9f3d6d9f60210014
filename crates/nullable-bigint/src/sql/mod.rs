//! Database scalar adapter.
//!
//! [`SqlValue`] is the value a driver hands over for a scanned column or
//! accepts as a bound parameter. Decimal columns (`DECIMAL(N,0)`,
//! `NUMERIC`) arrive as text or bytes; native integer columns take a direct
//! path that skips text parsing.

mod adapter;
mod value;

pub use adapter::{scan, to_sql_value, FromSqlValue, ToSqlValue};
pub use value::SqlValue;
