//! # Error Types — Project Loading and Saving
//!
//! Collaborators that load project files see one of these. A schema
//! rejection is reported to users as a broken or incompatible project; the
//! structural descriptor stays reachable through [`std::error::Error::source`]
//! for logs and `--explain` output but is never part of the display string.

use onlycut_schema::SchemaError;
use thiserror::Error;

/// Failure to turn bytes or JSON into a [`ProjectConfig`](crate::ProjectConfig),
/// or to render one back.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The document is valid JSON but does not match the project schema.
    #[error("media editor project is broken or incompatible")]
    Incompatible(#[source] SchemaError),

    /// The text is not JSON at all, or could not be serialized.
    #[error("project document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A timestamp could not be parsed.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),
}

impl ProjectError {
    /// The schema rejection behind an [`ProjectError::Incompatible`].
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Incompatible(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<SchemaError> for ProjectError {
    fn from(err: SchemaError) -> Self {
        Self::Incompatible(err)
    }
}
