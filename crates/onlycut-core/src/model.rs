//! # Project Document Model
//!
//! Typed form of `project-config.json`. Values of these types only come
//! into existence through [`project_schema`](crate::schemas::project_schema)
//! (or [`ProjectConfig::new`](crate::ProjectConfig::new), which validates
//! its own output), so holding one means the document had exactly this
//! shape.
//!
//! Everything derives `Serialize` with the on-disk field names, so a
//! collaborator can write a config back out and read it in again.

use onlycut_schema::{Literal, LiteralSet};
use serde::Serialize;

/// Kind of media an asset or track carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Video.
    Video,
    /// Audio.
    Audio,
    /// Still image.
    Image,
}

impl LiteralSet for MediaKind {
    const VARIANTS: &'static [(Literal, Self)] = &[
        (Literal::Str("video"), MediaKind::Video),
        (Literal::Str("audio"), MediaKind::Audio),
        (Literal::Str("image"), MediaKind::Image),
    ];
}

/// Root of a project document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    /// Naming, versioning and timestamps.
    pub metadata: ProjectMetadata,
    /// Imported media, as a tree of folders and leaf assets.
    pub assets: Vec<AssetNode>,
    /// Tracks and their clips.
    pub timeline: Timeline,
    /// Export settings; `None` means not chosen yet.
    pub settings: RenderSettings,
    /// Persisted editor UI state.
    pub state: EditorState,
}

/// Project metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectMetadata {
    /// Display name, shown on the project card.
    pub name: String,
    /// Version of the editor that wrote the project.
    pub version: String,
    /// Creation time.
    pub created_at: String,
    /// Last save time.
    pub last_modified: String,
    /// Path of the cover image, if one was picked.
    pub cover_path: Option<String>,
}

/// An entry of the asset tree.
///
/// Serialized untagged: an asset and a folder are told apart by shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssetNode {
    /// A media file.
    Asset(Asset),
    /// A folder of further entries.
    Directory(Directory),
}

/// A media file imported into the project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    /// Unique identifier, referenced by [`Clip::asset_id`].
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Relative or absolute path.
    pub path: String,
    pub metadata: AssetMetadata,
}

/// Probe results for an asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetMetadata {
    /// Seconds (video/audio).
    pub duration: f64,
    /// e.g. `1920x1080` (video/images).
    pub resolution: String,
    /// e.g. `H.264`.
    pub codec: String,
    /// e.g. `320kbps`.
    pub bitrate: String,
}

/// A folder in the asset tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directory {
    pub name: String,
    pub children: Vec<AssetNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub tracks: Vec<Track>,
}

/// A timeline track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub clips: Vec<Clip>,
}

/// A placement of an asset on a track. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clip {
    pub asset_id: String,
    pub start_time: f64,
    pub end_time: f64,
    /// Position on the timeline.
    pub position: f64,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSettings {
    pub resolution: Option<String>,
    pub framerate: Option<f64>,
    pub output_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorState {
    pub ui: UiState,
}

/// Zoom and playhead position of the editor window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    pub zoom_level: f64,
    /// Playhead, in seconds.
    pub current_time_cursor: f64,
}

impl AssetNode {
    /// The asset, if this entry is a leaf.
    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            AssetNode::Asset(asset) => Some(asset),
            AssetNode::Directory(_) => None,
        }
    }

    /// The folder, if this entry is one.
    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            AssetNode::Directory(dir) => Some(dir),
            AssetNode::Asset(_) => None,
        }
    }

    fn collect_assets<'a>(&'a self, out: &mut Vec<&'a Asset>) {
        match self {
            AssetNode::Asset(asset) => out.push(asset),
            AssetNode::Directory(dir) => {
                for child in &dir.children {
                    child.collect_assets(out);
                }
            }
        }
    }
}

impl ProjectConfig {
    /// Every leaf asset, depth-first in document order.
    pub fn all_assets(&self) -> Vec<&Asset> {
        let mut out = Vec::new();
        for node in &self.assets {
            node.collect_assets(&mut out);
        }
        out
    }

    /// Look up a leaf asset by id anywhere in the tree.
    pub fn find_asset(&self, id: &str) -> Option<&Asset> {
        self.all_assets().into_iter().find(|asset| asset.id == id)
    }
}
