//! JSON text codec.
//!
//! Accepted input: `null`, a JSON string holding a base-10 literal or a
//! `0x`-prefixed base-16 literal, or a bare JSON integer. Output is always
//! `null` or a quoted base-10 string, so values beyond 2^53 survive JSON
//! consumers that read numbers as doubles.

mod codec;
mod decoder;
mod encoder;

pub use codec::JsonBigIntCodec;
pub use decoder::decode_text;
pub use encoder::{encode_text, write_text};

pub(crate) use decoder::{decode_bare, decode_payload};

use crate::{CodecOptions, DecodeError, NullableBigInt};

impl NullableBigInt {
    /// Decodes JSON text with the default [`CodecOptions`].
    pub fn from_json(data: &[u8]) -> Result<Self, DecodeError> {
        decode_text(data, &CodecOptions::default())
    }

    /// Encodes as JSON text: `null` or a quoted decimal string.
    pub fn to_json(&self) -> Vec<u8> {
        encode_text(self)
    }
}
