//! # Union Schema
//!
//! Ordered alternation over two or more candidate schemas sharing one
//! output type. Candidates are tried strictly in declaration order and the
//! first one that accepts the input wins, so when two candidate shapes
//! overlap the more specific one must be declared first. There is no
//! "best match" scoring.
//!
//! Candidates with different outputs are lifted into a common type with
//! [`SchemaExt::map`], typically into the variants of a Rust `enum`.

use std::fmt;

use serde_json::Value;

use crate::error::SchemaError;
use crate::primitive::null;
use crate::schema::{Schema, SchemaExt, SharedSchema};

/// Schema accepting whatever its first accepting candidate accepts.
pub struct UnionSchema<T> {
    candidates: Vec<SharedSchema<T>>,
    descriptor: String,
}

/// Union of `first` and `second`; extend with [`UnionSchema::or`].
///
/// Taking the first two candidates by value makes a union of fewer than two
/// candidates impossible to construct.
pub fn union<A, B, T>(first: A, second: B) -> UnionSchema<T>
where
    A: Schema<Output = T> + Send + Sync + 'static,
    B: Schema<Output = T> + Send + Sync + 'static,
{
    let mut union = UnionSchema {
        candidates: vec![first.shared(), second.shared()],
        descriptor: String::new(),
    };
    union.describe();
    union
}

/// `inner` or JSON `null`, yielding `None` for `null`.
///
/// Descriptor: `union(<inner>|null)`.
pub fn nullable<S>(inner: S) -> UnionSchema<Option<S::Output>>
where
    S: Schema + Send + Sync + 'static,
    S::Output: 'static,
{
    union(inner.map(Some), null().map(|()| None))
}

impl<T> UnionSchema<T> {
    /// Append a candidate, tried after all existing ones.
    pub fn or<S>(mut self, next: S) -> Self
    where
        S: Schema<Output = T> + Send + Sync + 'static,
    {
        self.candidates.push(next.shared());
        self.describe();
        self
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always `false`; a union has at least two candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn describe(&mut self) {
        let names: Vec<&str> = self.candidates.iter().map(|c| c.descriptor()).collect();
        self.descriptor = format!("union({})", names.join("|"));
    }
}

impl<T> Schema for UnionSchema<T> {
    type Output = T;

    fn descriptor(&self) -> &str {
        &self.descriptor
    }

    fn parse(&self, input: &Value) -> Result<T, SchemaError> {
        for (position, candidate) in self.candidates.iter().enumerate() {
            match candidate.parse(input) {
                Ok(value) => return Ok(value),
                Err(miss) => {
                    tracing::trace!(union = %self.descriptor, position, error = %miss, "union candidate rejected");
                }
            }
        }
        Err(SchemaError::union_exhausted(&self.descriptor))
    }
}

impl<T> fmt::Debug for UnionSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnionSchema").field(&self.descriptor).finish()
    }
}
