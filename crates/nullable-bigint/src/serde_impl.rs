//! serde integration, so the type can sit in any derived struct.

use std::fmt;

use num_bigint::BigInt;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::json::{decode_bare, decode_payload};
use crate::{CodecOptions, DecodeError, NullableBigInt};

/// Absent serializes as none (`null` in JSON), present as a decimal string.
impl Serialize for NullableBigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_big() {
            Some(magnitude) => serializer.serialize_str(&magnitude.to_str_radix(10)),
            None => serializer.serialize_none(),
        }
    }
}

/// Accepts unit/none, strings under the quoted-payload rules, and any
/// integer the data format yields natively. Floats are rejected.
///
/// serde_json is built with `arbitrary_precision`, so JSON numbers outside
/// the 64-bit range arrive as their source text and are parsed exactly.
impl<'de> Deserialize<'de> for NullableBigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NullableBigIntVisitor)
    }
}

struct NullableBigIntVisitor;

impl<'de> Visitor<'de> for NullableBigIntVisitor {
    type Value = NullableBigInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, an integer, or a decimal or 0x-hex integer string")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NullableBigInt::absent())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NullableBigInt::absent())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(NullableBigInt::from_i64(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(NullableBigInt::from_u64(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(NullableBigInt::from_big(BigInt::from(v)))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(NullableBigInt::from_big(BigInt::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(E::custom(DecodeError::fraction(v.to_string().as_bytes())))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let number = serde_json::Number::deserialize(MapAccessDeserializer::new(map))?;
        decode_bare(number.to_string().as_bytes()).map_err(de::Error::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        decode_payload(v.as_bytes(), v.as_bytes(), &CodecOptions::default()).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        decode_payload(v, v, &CodecOptions::default()).map_err(E::custom)
    }
}
