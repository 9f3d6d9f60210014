//! Literal byte sequences recognised by the text codec.

/// The unquoted JSON `null` token.
pub const NULL: &[u8] = b"null";

/// JSON string delimiter.
pub const QUOTE: u8 = b'"';

/// Prefix marking a quoted base-16 literal.
pub const HEX_PREFIX: &[u8] = b"0x";

/// Identifier reported by [`crate::json::JsonBigIntCodec::id`].
pub const CODEC_ID: &str = "bigint-json";
