//! # Error Types — Validation Failures
//!
//! Every schema rejects input with a single [`SchemaError`]. There is no
//! accumulation: the first nonconforming value aborts the walk, and each
//! enclosing composite replaces the failure with its own descriptor on the
//! way back up. The caller learns which *shape* was expected, not which
//! field broke it.

use serde_json::Value;
use thiserror::Error;

/// The three ways a schema can reject its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A primitive or enum leaf received the wrong kind of value.
    TypeMismatch,
    /// An object or array was malformed, or one of its children failed.
    CompositeTypeMismatch,
    /// No candidate of a union accepted the input.
    UnionExhausted,
}

/// A rejected `parse`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Leaf rejection.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Descriptor of the schema that rejected the value.
        expected: String,
        /// JSON kind of the offending value.
        found: &'static str,
    },

    /// Composite rejection, re-labelled with the composite's descriptor.
    #[error("expected {expected}")]
    CompositeTypeMismatch {
        /// Descriptor of the object or array schema.
        expected: String,
    },

    /// Every union candidate failed.
    #[error("expected {expected}")]
    UnionExhausted {
        /// Descriptor of the union schema.
        expected: String,
    },
}

impl SchemaError {
    /// Leaf rejection of `input` (or of a missing field, when `None`).
    pub fn type_mismatch(expected: &str, input: Option<&Value>) -> Self {
        Self::TypeMismatch {
            expected: expected.to_owned(),
            found: input.map_or(UNDEFINED, json_kind),
        }
    }

    /// Composite rejection carrying the composite's descriptor.
    pub fn composite(expected: &str) -> Self {
        Self::CompositeTypeMismatch {
            expected: expected.to_owned(),
        }
    }

    /// Union rejection carrying the union's descriptor.
    pub fn union_exhausted(expected: &str) -> Self {
        Self::UnionExhausted {
            expected: expected.to_owned(),
        }
    }

    /// Which of the three failure classes this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::CompositeTypeMismatch { .. } => ErrorKind::CompositeTypeMismatch,
            Self::UnionExhausted { .. } => ErrorKind::UnionExhausted,
        }
    }

    /// Descriptor of the shape that was expected.
    pub fn expected(&self) -> &str {
        match self {
            Self::TypeMismatch { expected, .. }
            | Self::CompositeTypeMismatch { expected }
            | Self::UnionExhausted { expected } => expected,
        }
    }
}

/// Reported as `found` when an object field is absent.
pub const UNDEFINED: &str = "undefined";

/// JSON kind name of a value, as used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
