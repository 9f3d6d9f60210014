//! Codec policies.
//!
//! Two historical behaviours exist for absence at the codec edges. Each is
//! pinned by one field here; the [`Default`] is what every option-less entry
//! point (trait impls, serde) uses.

use serde::{Deserialize, Serialize};

/// How a quoted empty payload (`""` or `"0x"`) decodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyLiteralPolicy {
    /// Decodes to an absent value.
    #[default]
    Absent,
    /// Fails with `MalformedDecimal` / `MalformedHex`.
    Reject,
}

/// What an absent value becomes when bound as a database parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentScalarPolicy {
    /// Host `NULL`.
    #[default]
    Null,
    /// The decimal string `"0"`.
    Zero,
}

/// Options for the text and database adapters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    pub empty_literal: EmptyLiteralPolicy,
    pub absent_scalar: AbsentScalarPolicy,
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_empty_literal(mut self, policy: EmptyLiteralPolicy) -> Self {
        self.empty_literal = policy;
        self
    }

    pub fn with_absent_scalar(mut self, policy: AbsentScalarPolicy) -> Self {
        self.absent_scalar = policy;
        self
    }
}
