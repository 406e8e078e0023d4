//! # Project Schemas
//!
//! The declarative definition of `project-config.json`, built once per
//! process and shared. The asset list is a tree: a directory's children
//! are assets or further directories, so the directory schema refers back
//! to itself through a lazy schema.
//!
//! Candidate order in the asset-or-directory union is asset first. The two
//! shapes share no required fields, so the order only matters for speed,
//! but it is fixed here and relied on by tests.

use std::sync::OnceLock;

use onlycut_schema::{
    array, enumeration, field, lazy, nullable, number, object, string, union, Schema,
    SchemaExt, SharedSchema, UnionSchema,
};

use crate::model::{
    Asset, AssetMetadata, AssetNode, Clip, Directory, EditorState, MediaKind, ProjectConfig,
    ProjectMetadata, RenderSettings, Timeline, Track, UiState,
};

/// Schema of a leaf asset.
pub fn asset_schema() -> &'static SharedSchema<Asset> {
    static ASSET: OnceLock<SharedSchema<Asset>> = OnceLock::new();
    ASSET.get_or_init(|| {
        let metadata = object((
            field("duration", number()),
            field("resolution", string()),
            field("codec", string()),
            field("bitrate", string()),
        ))
        .map(|(duration, resolution, codec, bitrate)| AssetMetadata {
            duration,
            resolution,
            codec,
            bitrate,
        });

        object((
            field("id", string()),
            field("type", enumeration::<MediaKind>()),
            field("path", string()),
            field("metadata", metadata),
        ))
        .map(|(id, kind, path, metadata)| Asset {
            id,
            kind,
            path,
            metadata,
        })
        .shared()
    })
}

/// Schema of a folder in the asset tree.
pub fn directory_schema() -> &'static SharedSchema<Directory> {
    static DIRECTORY: OnceLock<SharedSchema<Directory>> = OnceLock::new();
    DIRECTORY.get_or_init(|| {
        object((
            field("name", string()),
            field("children", array(asset_node_schema())),
        ))
        .map(|(name, children)| Directory { name, children })
        .shared()
    })
}

/// `Asset | Directory`. The directory candidate is lazy so that this can be
/// built from inside [`directory_schema`].
pub fn asset_node_schema() -> UnionSchema<AssetNode> {
    union(
        asset_schema().clone().map(AssetNode::Asset),
        lazy(|| directory_schema().clone()).map(AssetNode::Directory),
    )
}

/// Schema of a timeline clip.
pub fn clip_schema() -> &'static SharedSchema<Clip> {
    static CLIP: OnceLock<SharedSchema<Clip>> = OnceLock::new();
    CLIP.get_or_init(|| {
        object((
            field("asset_id", string()),
            field("start_time", number()),
            field("end_time", number()),
            field("position", number()),
        ))
        .map(|(asset_id, start_time, end_time, position)| Clip {
            asset_id,
            start_time,
            end_time,
            position,
        })
        .shared()
    })
}

/// Schema of a timeline track.
pub fn track_schema() -> &'static SharedSchema<Track> {
    static TRACK: OnceLock<SharedSchema<Track>> = OnceLock::new();
    TRACK.get_or_init(|| {
        object((
            field("id", string()),
            field("type", enumeration::<MediaKind>()),
            field("clips", array(clip_schema().clone())),
        ))
        .map(|(id, kind, clips)| Track { id, kind, clips })
        .shared()
    })
}

/// Root schema of a project document.
pub fn project_schema() -> &'static SharedSchema<ProjectConfig> {
    static PROJECT: OnceLock<SharedSchema<ProjectConfig>> = OnceLock::new();
    PROJECT.get_or_init(|| {
        let metadata = object((
            field("name", string()),
            field("version", string()),
            field("created_at", string()),
            field("last_modified", string()),
            field("cover_path", nullable(string())),
        ))
        .map(
            |(name, version, created_at, last_modified, cover_path)| ProjectMetadata {
                name,
                version,
                created_at,
                last_modified,
                cover_path,
            },
        );

        let timeline = object((field("tracks", array(track_schema().clone())),))
            .map(|(tracks,)| Timeline { tracks });

        let settings = object((
            field("resolution", nullable(string())),
            field("framerate", nullable(number())),
            field("output_format", nullable(string())),
        ))
        .map(|(resolution, framerate, output_format)| RenderSettings {
            resolution,
            framerate,
            output_format,
        });

        let ui = object((
            field("zoom_level", number()),
            field("current_time_cursor", number()),
        ))
        .map(|(zoom_level, current_time_cursor)| UiState {
            zoom_level,
            current_time_cursor,
        });
        let state = object((field("ui", ui),)).map(|(ui,)| EditorState { ui });

        let schema = object((
            field("metadata", metadata),
            field("assets", array(asset_node_schema())),
            field("timeline", timeline),
            field("settings", settings),
            field("state", state),
        ))
        .map(|(metadata, assets, timeline, settings, state)| ProjectConfig {
            metadata,
            assets,
            timeline,
            settings,
            state,
        });

        tracing::debug!(descriptor = schema.descriptor(), "project schema built");
        schema.shared()
    })
}
