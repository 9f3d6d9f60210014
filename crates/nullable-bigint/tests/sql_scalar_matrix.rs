//! Database scalar adapter: scanned columns and bound parameters.

use nullable_bigint::sql::{scan, to_sql_value};
use nullable_bigint::{
    AbsentScalarPolicy, CodecOptions, DecodeError, FromSqlValue, NullableBigInt, SqlValue,
    ToSqlValue,
};

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

#[test]
fn scan_matrix() {
    let cases = vec![
        (SqlValue::Text("1024".into()), NullableBigInt::from_i64(1024)),
        (SqlValue::Bytes(b"1024".to_vec()), NullableBigInt::from_i64(1024)),
        (SqlValue::Text("-7".into()), NullableBigInt::from_i64(-7)),
        (SqlValue::Int64(1024), NullableBigInt::from_i64(1024)),
        (SqlValue::Int32(i32::MIN), NullableBigInt::from_i64(i64::from(i32::MIN))),
        (SqlValue::UInt64(u64::MAX), NullableBigInt::from_u64(u64::MAX)),
        (SqlValue::Null, NullableBigInt::absent()),
    ];
    for (raw, want) in cases {
        assert_eq!(scan(&raw).unwrap(), want, "{raw:?}");
    }
}

#[test]
fn scan_decimal_column_beyond_64_bits() {
    let text = "99999999999999999999999999999999999999";
    let got = NullableBigInt::from_sql_value(&SqlValue::from(text)).unwrap();
    assert_eq!(got.to_string(), text);
}

#[test]
fn scan_rejects_invalid_text() {
    let err = scan(&SqlValue::Text("abc".into())).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedDecimal { .. }));
    assert!(err.to_string().contains("abc"));
}

#[test]
fn scan_rejects_fractional_decimal_column() {
    assert!(matches!(
        scan(&SqlValue::Bytes(b"10.24".to_vec())),
        Err(DecodeError::UnsupportedFraction { .. })
    ));
}

#[test]
fn scan_rejects_hex_and_quotes() {
    assert!(scan(&SqlValue::Text("0x400".into())).is_err());
    assert!(scan(&SqlValue::Text("\"1\"".into())).is_err());
    assert!(scan(&SqlValue::Text(String::new())).is_err());
}

#[test]
fn scan_never_coerces_floats() {
    let err = scan(&SqlValue::Float64(10.24)).unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedSourceKind("float64")));
    let err = scan(&SqlValue::Float32(1.0)).unwrap_err();
    assert!(err.to_string().contains("float32"));
}

// ---------------------------------------------------------------------------
// Bind
// ---------------------------------------------------------------------------

#[test]
fn present_binds_as_decimal_text() {
    assert_eq!(
        NullableBigInt::from_i64(1024).to_sql_value(),
        SqlValue::Text("1024".into())
    );
}

#[test]
fn null_round_trip_under_each_policy() {
    let absent = scan(&SqlValue::Null).unwrap();
    assert_eq!(to_sql_value(&absent, &CodecOptions::default()), SqlValue::Null);

    let zero = CodecOptions::default().with_absent_scalar(AbsentScalarPolicy::Zero);
    assert_eq!(to_sql_value(&absent, &zero), SqlValue::Text("0".into()));
}

#[test]
fn option_values_convert_to_sql_null() {
    assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
    assert!(SqlValue::from(None::<String>).is_null());
    assert_eq!(SqlValue::from(Some(5i64)), SqlValue::Int64(5));
}
