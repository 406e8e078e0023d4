//! # onlycut-core — Project Configuration for the Only Cut Editor
//!
//! Typed model of `project-config.json`, the schema that guards it, and the
//! load/save boundary used by the rest of the application.
//!
//! ## Loading
//!
//! A collaborator reads the file (and undoes any obfuscation), then hands
//! the text to [`ProjectConfig::from_json_str`] or the decoded value to
//! [`ProjectConfig::from_value`]. The result is either a complete
//! [`ProjectConfig`] or a [`ProjectError`]; there is no partial load.
//!
//! ## Saving
//!
//! [`ProjectConfig::to_value`] / [`ProjectConfig::to_json_string`] emit the
//! same shape the schema accepts.
//!
//! ## Crate Policy
//!
//! - No file or network I/O.
//! - Schemas are built once per process (see [`schemas`]).
//! - No `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod model;
pub mod schemas;
pub mod temporal;

pub use document::DEFAULT_ZOOM_LEVEL;
pub use error::ProjectError;
pub use model::{
    Asset, AssetMetadata, AssetNode, Clip, Directory, EditorState, MediaKind, ProjectConfig,
    ProjectMetadata, RenderSettings, Timeline, Track, UiState,
};
pub use schemas::{
    asset_node_schema, asset_schema, clip_schema, directory_schema, project_schema, track_schema,
};
pub use temporal::Timestamp;
