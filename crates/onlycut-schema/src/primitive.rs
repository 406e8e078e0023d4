//! Primitive leaf schemas: string, number, boolean, null.
//!
//! Acceptance is decided by the JSON kind alone. Nothing is coerced: `"3"`
//! is not a number, `0` is not `false`, and a missing field is not `null`.

use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::Schema;

/// Accepts JSON strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSchema;

/// Accepts JSON numbers, yielding them as `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema;

/// Accepts JSON booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSchema;

/// Accepts only JSON `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSchema;

/// String schema.
pub fn string() -> StringSchema {
    StringSchema
}

/// Number schema.
pub fn number() -> NumberSchema {
    NumberSchema
}

/// Boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema
}

/// Null schema.
pub fn null() -> NullSchema {
    NullSchema
}

impl Schema for StringSchema {
    type Output = String;

    fn descriptor(&self) -> &str {
        "string"
    }

    fn parse(&self, input: &Value) -> Result<String, SchemaError> {
        match input {
            Value::String(s) => Ok(s.clone()),
            other => Err(SchemaError::type_mismatch(self.descriptor(), Some(other))),
        }
    }
}

impl Schema for NumberSchema {
    type Output = f64;

    fn descriptor(&self) -> &str {
        "number"
    }

    fn parse(&self, input: &Value) -> Result<f64, SchemaError> {
        input
            .as_f64()
            .ok_or_else(|| SchemaError::type_mismatch(self.descriptor(), Some(input)))
    }
}

impl Schema for BooleanSchema {
    type Output = bool;

    fn descriptor(&self) -> &str {
        "boolean"
    }

    fn parse(&self, input: &Value) -> Result<bool, SchemaError> {
        input
            .as_bool()
            .ok_or_else(|| SchemaError::type_mismatch(self.descriptor(), Some(input)))
    }
}

impl Schema for NullSchema {
    type Output = ();

    fn descriptor(&self) -> &str {
        "null"
    }

    fn parse(&self, input: &Value) -> Result<(), SchemaError> {
        match input {
            Value::Null => Ok(()),
            other => Err(SchemaError::type_mismatch(self.descriptor(), Some(other))),
        }
    }
}
