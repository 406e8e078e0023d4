//! # Enumeration Schema
//!
//! Accepts a value only if it is exactly one of a fixed, non-empty set of
//! string or number literals. Each literal is paired with the Rust value it
//! maps to, so a string enum can come out as a plain Rust `enum`.
//!
//! The literal set is declared through [`LiteralSet`]. Emptiness is rejected
//! at compile time: instantiating [`enumeration`] for a type whose
//! `VARIANTS` is empty fails const evaluation.

use std::fmt;

use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::Schema;

/// A literal accepted by an [`EnumSchema`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// Matches a JSON string with exactly this content.
    Str(&'static str),
    /// Matches a JSON number equal to this value.
    Number(f64),
}

impl Literal {
    /// Exact match; a number never matches a string literal and vice versa.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Str(expected), Value::String(actual)) => expected == actual,
            (Literal::Number(expected), Value::Number(actual)) => {
                actual.as_f64() == Some(*expected)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "\"{s}\""),
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A Rust type with a closed set of literal spellings.
pub trait LiteralSet: Clone + 'static {
    /// Every accepted literal with the value it yields. Must be non-empty.
    const VARIANTS: &'static [(Literal, Self)];
}

/// Schema accepting the literals of `T`.
#[derive(Debug, Clone)]
pub struct EnumSchema<T: 'static> {
    variants: &'static [(Literal, T)],
    descriptor: String,
}

impl<T: LiteralSet> EnumSchema<T> {
    const NON_EMPTY: () = assert!(
        !T::VARIANTS.is_empty(),
        "an enum schema needs at least one literal"
    );

    fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        let literals: Vec<String> = T::VARIANTS
            .iter()
            .map(|(literal, _)| literal.to_string())
            .collect();

        Self {
            variants: T::VARIANTS,
            descriptor: format!("enum({})", literals.join("|")),
        }
    }

    /// The accepted literals, in declaration order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.variants.iter().map(|(literal, _)| *literal)
    }
}

/// Enum schema over the literals of `T`.
pub fn enumeration<T: LiteralSet>() -> EnumSchema<T> {
    EnumSchema::new()
}

impl<T: LiteralSet> Schema for EnumSchema<T> {
    type Output = T;

    fn descriptor(&self) -> &str {
        &self.descriptor
    }

    fn parse(&self, input: &Value) -> Result<T, SchemaError> {
        self.variants
            .iter()
            .find(|(literal, _)| literal.matches(input))
            .map(|(_, value)| value.clone())
            .ok_or_else(|| SchemaError::type_mismatch(&self.descriptor, Some(input)))
    }
}
