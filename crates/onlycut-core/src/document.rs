//! # Project Document Boundary
//!
//! The calls collaborators make when loading or saving a project. Loading
//! is decode-then-validate: any JSON that does not match the project
//! schema becomes [`ProjectError::Incompatible`] and nothing partial is
//! returned. Saving is plain serialization of the typed model.
//!
//! File access, obfuscation and key handling stay with the caller; this
//! module only sees strings and JSON values.

use onlycut_schema::Schema;
use serde_json::Value;

use crate::error::ProjectError;
use crate::model::{EditorState, ProjectConfig, ProjectMetadata, RenderSettings, Timeline, UiState};
use crate::schemas::project_schema;
use crate::temporal::Timestamp;

/// Zoom level of a freshly created project.
pub const DEFAULT_ZOOM_LEVEL: f64 = 1.0;

impl ProjectConfig {
    /// Validate a decoded JSON document.
    ///
    /// # Errors
    ///
    /// [`ProjectError::Incompatible`] if the document does not match the
    /// project schema.
    pub fn from_value(value: &Value) -> Result<Self, ProjectError> {
        project_schema().parse(value).map_err(|err| {
            tracing::warn!(error = %err, "project document rejected");
            ProjectError::Incompatible(err)
        })
    }

    /// Decode and validate JSON text.
    ///
    /// # Errors
    ///
    /// [`ProjectError::Json`] if `text` is not JSON, otherwise as
    /// [`ProjectConfig::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self, ProjectError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Parse and validate a document from raw bytes, as read from disk.
    ///
    /// # Errors
    ///
    /// [`ProjectError::Json`] if `bytes` are not UTF-8 JSON, otherwise as
    /// [`ProjectConfig::from_value`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ProjectError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value)
    }

    /// The document as a JSON value, in the on-disk shape.
    ///
    /// # Errors
    ///
    /// [`ProjectError::Json`] if serialization fails.
    pub fn to_value(&self) -> Result<Value, ProjectError> {
        Ok(serde_json::to_value(self)?)
    }

    /// The document as compact JSON text.
    ///
    /// # Errors
    ///
    /// [`ProjectError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string(self)?)
    }

    /// A new, empty project stamped with the current time.
    ///
    /// # Errors
    ///
    /// As [`ProjectConfig::new_at`].
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, ProjectError> {
        Self::new_at(name, version, Timestamp::now())
    }

    /// A new, empty project created at `now`: no assets, no tracks, no
    /// export settings, zoom 1 and the playhead at 0.
    ///
    /// The document is put through the project schema before it is
    /// returned, so a default that drifts from the schema is caught here
    /// rather than on the next load.
    ///
    /// # Errors
    ///
    /// [`ProjectError::Incompatible`] if the default document fails the
    /// schema.
    pub fn new_at(
        name: impl Into<String>,
        version: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ProjectError> {
        let stamp = now.to_iso8601();
        let draft = ProjectConfig {
            metadata: ProjectMetadata {
                name: name.into(),
                version: version.into(),
                created_at: stamp.clone(),
                last_modified: stamp,
                cover_path: None,
            },
            assets: Vec::new(),
            timeline: Timeline { tracks: Vec::new() },
            settings: RenderSettings {
                resolution: None,
                framerate: None,
                output_format: None,
            },
            state: EditorState {
                ui: UiState {
                    zoom_level: DEFAULT_ZOOM_LEVEL,
                    current_time_cursor: 0.0,
                },
            },
        };

        let project = Self::from_value(&draft.to_value()?)?;
        tracing::info!(name = %project.metadata.name, "created project config");
        Ok(project)
    }

    /// Record a save at `now`.
    pub fn touch(&mut self, now: Timestamp) {
        self.metadata.last_modified = now.to_iso8601();
    }
}
