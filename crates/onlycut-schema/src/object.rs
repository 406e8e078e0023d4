//! # Object Schema
//!
//! An object schema is a fixed, ordered list of named fields, each with its
//! own child schema. Fields are declared as a tuple of [`Field`]s, so the
//! output is a tuple of the children's outputs in declaration order; map it
//! into a named struct with [`SchemaExt::map`](crate::SchemaExt::map).
//!
//! ## Rules
//!
//! - Input must be a JSON object. Arrays, primitives and `null` are rejected.
//! - Only declared fields are read. Unknown fields are ignored and do not
//!   appear in the output.
//! - Every declared field is mandatory. A missing field is handed to its
//!   child as "undefined", which no schema accepts.
//! - Fields are checked in declaration order and the first failure stops
//!   the walk. The failure is replaced by a `CompositeTypeMismatch` naming
//!   this object's descriptor.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::schema::Schema;

/// A named field of an object schema.
#[derive(Debug, Clone)]
pub struct Field<S> {
    name: &'static str,
    schema: S,
}

/// Declare field `name` validated by `schema`.
pub fn field<S: Schema>(name: &'static str, schema: S) -> Field<S> {
    Field { name, schema }
}

impl<S: Schema> Field<S> {
    /// The field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn parse_in(&self, object: &Map<String, Value>) -> Result<S::Output, SchemaError> {
        match object.get(self.name) {
            Some(value) => self.schema.parse(value),
            None => Err(SchemaError::type_mismatch(self.schema.descriptor(), None)),
        }
    }
}

/// A tuple of [`Field`]s that an [`ObjectSchema`] can validate.
///
/// Implemented for tuples of one to eight fields.
pub trait FieldList {
    /// Tuple of the field schemas' outputs.
    type Output;

    /// `(name, descriptor)` for each field, in declaration order.
    fn descriptors(&self) -> Vec<(&'static str, &str)>;

    /// Parse each declared field of `object`, stopping at the first failure.
    fn parse_fields(&self, object: &Map<String, Value>) -> Result<Self::Output, SchemaError>;
}

macro_rules! impl_field_list {
    ($($S:ident : $idx:tt),+) => {
        impl<$($S: Schema),+> FieldList for ($(Field<$S>,)+) {
            type Output = ($($S::Output,)+);

            fn descriptors(&self) -> Vec<(&'static str, &str)> {
                vec![$((self.$idx.name, self.$idx.schema.descriptor())),+]
            }

            fn parse_fields(
                &self,
                object: &Map<String, Value>,
            ) -> Result<Self::Output, SchemaError> {
                Ok(($(self.$idx.parse_in(object)?,)+))
            }
        }
    };
}

impl_field_list!(A: 0);
impl_field_list!(A: 0, B: 1);
impl_field_list!(A: 0, B: 1, C: 2);
impl_field_list!(A: 0, B: 1, C: 2, D: 3);
impl_field_list!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_field_list!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_field_list!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_field_list!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);

/// Schema for a JSON object with a fixed set of fields.
pub struct ObjectSchema<L> {
    fields: L,
    descriptor: String,
}

/// Object schema over `fields`.
///
/// The descriptor is a JSON object mapping each field name to its child's
/// descriptor, e.g. `{"id":"string","size":"number"}`.
pub fn object<L: FieldList>(fields: L) -> ObjectSchema<L> {
    let entries: Vec<String> = fields
        .descriptors()
        .into_iter()
        .map(|(name, descriptor)| {
            format!(
                "{}:{}",
                Value::String(name.to_owned()),
                Value::String(descriptor.to_owned())
            )
        })
        .collect();
    let descriptor = format!("{{{}}}", entries.join(","));

    ObjectSchema { fields, descriptor }
}

impl<L: FieldList> Schema for ObjectSchema<L> {
    type Output = L::Output;

    fn descriptor(&self) -> &str {
        &self.descriptor
    }

    fn parse(&self, input: &Value) -> Result<L::Output, SchemaError> {
        let object = input
            .as_object()
            .ok_or_else(|| SchemaError::composite(&self.descriptor))?;

        self.fields.parse_fields(object).map_err(|inner| {
            tracing::debug!(expected = %self.descriptor, error = %inner, "object field rejected");
            SchemaError::composite(&self.descriptor)
        })
    }
}

impl<L> fmt::Debug for ObjectSchema<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectSchema").field(&self.descriptor).finish()
    }
}
