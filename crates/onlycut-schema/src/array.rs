//! Homogeneous array schema.

use std::fmt;

use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::Schema;

/// Schema for a JSON array whose elements all match one schema.
pub struct ArraySchema<S> {
    element: S,
    descriptor: String,
}

/// Array schema over `element`. Descriptor: `<element>[]`.
pub fn array<S: Schema>(element: S) -> ArraySchema<S> {
    let descriptor = format!("{}[]", element.descriptor());
    ArraySchema {
        element,
        descriptor,
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    type Output = Vec<S::Output>;

    fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Elements are parsed in index order; the first rejected element
    /// fails the whole array with this array's descriptor.
    fn parse(&self, input: &Value) -> Result<Vec<S::Output>, SchemaError> {
        let items = input
            .as_array()
            .ok_or_else(|| SchemaError::composite(&self.descriptor))?;

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let parsed = self.element.parse(item).map_err(|inner| {
                tracing::debug!(expected = %self.descriptor, index, error = %inner, "array element rejected");
                SchemaError::composite(&self.descriptor)
            })?;
            out.push(parsed);
        }
        Ok(out)
    }
}

impl<S> fmt::Debug for ArraySchema<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArraySchema").field(&self.descriptor).finish()
    }
}
