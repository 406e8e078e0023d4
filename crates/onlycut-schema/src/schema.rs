//! # The `Schema` Trait — Uniform Validation Entrypoint
//!
//! Every schema kind exposes the same two operations: a structural
//! descriptor fixed at construction, and `parse`, which either accepts a
//! JSON value and yields the schema's [`Schema::Output`] or rejects it with
//! a [`SchemaError`]. Composites hold their children through this trait and
//! never need to know the concrete kind underneath.
//!
//! The associated `Output` type is the type witness: the Rust type a caller
//! receives is decided when the schema is built, so results arrive with a
//! statically known shape and no casting.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::SchemaError;

/// An immutable validation rule over JSON values.
pub trait Schema {
    /// The value produced on acceptance.
    type Output;

    /// Human-readable structural name, used in error messages.
    fn descriptor(&self) -> &str;

    /// Validate `input` and convert it into [`Self::Output`].
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered, re-labelled by each
    /// enclosing composite on the way up.
    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError>;
}

/// A type-erased, reference-counted schema.
///
/// Union candidates and lazy targets are stored this way so that schemas
/// of different concrete kinds can sit side by side, and so that a schema
/// held in a `static` can be shared with the lazy reference that points
/// back at it.
pub type SharedSchema<T> = Arc<dyn Schema<Output = T> + Send + Sync>;

impl<S: Schema + ?Sized> Schema for Arc<S> {
    type Output = S::Output;

    fn descriptor(&self) -> &str {
        (**self).descriptor()
    }

    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError> {
        (**self).parse(input)
    }
}

/// Combinators available on every schema.
pub trait SchemaExt: Schema + Sized {
    /// Convert accepted values with `f`; acceptance is unchanged.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map { inner: self, f }
    }

    /// Erase the concrete type behind an `Arc`.
    fn shared(self) -> SharedSchema<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<S: Schema> SchemaExt for S {}

/// Output of [`SchemaExt::map`].
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F, U> Schema for Map<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> U,
{
    type Output = U;

    fn descriptor(&self) -> &str {
        self.inner.descriptor()
    }

    fn parse(&self, input: &Value) -> Result<U, SchemaError> {
        self.inner.parse(input).map(&self.f)
    }
}

impl<S: Schema, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Map").field(&self.inner.descriptor()).finish()
    }
}
