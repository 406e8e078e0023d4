//! # onlycut-schema — Schema Combinators for Untrusted JSON
//!
//! A small validator engine that turns dynamically shaped JSON into
//! strongly typed Rust values, rejecting anything that does not match a
//! declared schema. It is the trust boundary between the project files on
//! disk and the editor's in-memory model.
//!
//! ## Schema Kinds
//!
//! - Primitives: [`string`], [`number`], [`boolean`], [`null`].
//! - [`enumeration`] — membership in a fixed literal set ([`LiteralSet`]).
//! - [`object`] — fixed named fields, built from [`field`]s.
//! - [`array`] — homogeneous elements.
//! - [`union`] / [`nullable`] — ordered alternation, first match wins.
//! - [`lazy`] — deferred resolution for recursive shapes.
//!
//! Every kind implements [`Schema`], whose `Output` associated type is the
//! Rust type produced on success. [`SchemaExt::map`] lifts outputs into
//! domain structs and enums.
//!
//! ## Example
//!
//! ```
//! use onlycut_schema::{field, nullable, number, object, string, Schema, SchemaExt};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct Settings {
//!     resolution: Option<String>,
//!     framerate: Option<f64>,
//! }
//!
//! let schema = object((
//!     field("resolution", nullable(string())),
//!     field("framerate", nullable(number())),
//! ))
//! .map(|(resolution, framerate)| Settings { resolution, framerate });
//!
//! let parsed = schema.parse(&json!({"resolution": null, "framerate": 30})).unwrap();
//! assert_eq!(parsed, Settings { resolution: None, framerate: Some(30.0) });
//! assert!(schema.parse(&json!({"resolution": null, "framerate": "30"})).is_err());
//! ```
//!
//! ## Crate Policy
//!
//! - No I/O, no coercion, no partial results.
//! - Fail-fast: one [`SchemaError`] per `parse`, naming the expected shape.
//! - No `unsafe`, no panics outside tests.

pub mod array;
pub mod enumeration;
pub mod error;
pub mod lazy;
pub mod object;
pub mod primitive;
pub mod schema;
pub mod union;

pub use array::{array, ArraySchema};
pub use enumeration::{enumeration, EnumSchema, Literal, LiteralSet};
pub use error::{json_kind, ErrorKind, SchemaError};
pub use lazy::{lazy, LazySchema};
pub use object::{field, object, Field, FieldList, ObjectSchema};
pub use primitive::{boolean, null, number, string};
pub use schema::{Map, Schema, SchemaExt, SharedSchema};
pub use union::{nullable, union, UnionSchema};
