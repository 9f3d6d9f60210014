//! JSON codec wrapper carrying a fixed set of [`CodecOptions`].

use crate::constants::CODEC_ID;
use crate::{CodecOptions, DecodeError, NullableBigInt};

use super::{decode_text, encode_text};

#[derive(Debug, Clone, Default)]
pub struct JsonBigIntCodec {
    pub options: CodecOptions,
}

impl JsonBigIntCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn id(&self) -> &'static str {
        CODEC_ID
    }

    pub fn encode(&self, value: &NullableBigInt) -> Vec<u8> {
        encode_text(value)
    }

    pub fn decode(&self, data: &[u8]) -> Result<NullableBigInt, DecodeError> {
        decode_text(data, &self.options)
    }
}
