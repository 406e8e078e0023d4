//! # Lazy Schema — Deferred, Self-Referential Resolution
//!
//! A lazy schema stores only a zero-argument supplier. The supplier runs on
//! the first `parse`, its schema is cached in a write-once cell, and that
//! cached schema serves every later call on the same instance.
//!
//! This is what lets a schema mention itself before its own definition is
//! finished: a directory schema can declare its `children` as
//! `lazy(|| directory_schema().clone())` because the supplier is not called
//! until the directory schema is fully built and stored.
//!
//! ## Constraints
//!
//! - There is no cycle detection. The chain of suppliers must eventually
//!   reach a finite definition.
//! - The memo cell is a [`OnceLock`]: when several threads race on the first
//!   `parse`, exactly one supplier result is installed and all of them use
//!   it.
//! - Inner errors pass through unchanged; a lazy schema adds no wrapping of
//!   its own.

use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::{Schema, SharedSchema};

type Supplier<T> = Box<dyn Fn() -> SharedSchema<T> + Send + Sync>;

/// Descriptor of every lazy schema. The inner schema is not known until
/// first use.
pub const LAZY_DESCRIPTOR: &str = "lazy schema";

/// Schema resolved from a supplier on first use.
pub struct LazySchema<T> {
    supplier: Supplier<T>,
    resolved: OnceLock<SharedSchema<T>>,
}

/// Lazy schema over `supplier`. The supplier is not invoked here.
pub fn lazy<T, F>(supplier: F) -> LazySchema<T>
where
    F: Fn() -> SharedSchema<T> + Send + Sync + 'static,
{
    LazySchema {
        supplier: Box::new(supplier),
        resolved: OnceLock::new(),
    }
}

impl<T> LazySchema<T> {
    /// Whether the supplier has already run.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    fn resolve(&self) -> &SharedSchema<T> {
        self.resolved.get_or_init(|| {
            let inner = (self.supplier)();
            tracing::trace!(inner = inner.descriptor(), "lazy schema resolved");
            inner
        })
    }
}

impl<T> Schema for LazySchema<T> {
    type Output = T;

    fn descriptor(&self) -> &str {
        LAZY_DESCRIPTOR
    }

    fn parse(&self, input: &Value) -> Result<T, SchemaError> {
        self.resolve().parse(input)
    }
}

impl<T> fmt::Debug for LazySchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySchema")
            .field("resolved", &self.resolved.get().map(|s| s.descriptor()))
            .finish()
    }
}
