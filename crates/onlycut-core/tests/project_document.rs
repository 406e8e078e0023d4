//! # Project Document Validation
//!
//! End-to-end checks of the project schema against realistic documents:
//! the example project shipped with the editor, a nested asset tree, and
//! systematic single-field corruption of a valid document.

use onlycut_core::{
    project_schema, AssetNode, MediaKind, ProjectConfig, ProjectError, Timestamp,
};
use onlycut_schema::{ErrorKind, Schema};
use proptest::prelude::*;
use serde_json::{json, Value};

fn example_project() -> Value {
    json!({
        "metadata": {
            "name": "Example Project",
            "version": "1.0.0",
            "created_at": "2025-02-20T12:00:00Z",
            "last_modified": "2025-02-20T12:00:00Z",
            "cover_path": null
        },
        "assets": [
            {
                "id": "asset1",
                "type": "video",
                "path": "/path/to/video.mp4",
                "metadata": {
                    "duration": 120,
                    "resolution": "1920x1080",
                    "codec": "H.264",
                    "bitrate": "320kbps"
                }
            },
            {
                "name": "music",
                "children": [
                    {
                        "name": "loops",
                        "children": [
                            {
                                "id": "asset2",
                                "type": "audio",
                                "path": "/path/to/loop.wav",
                                "metadata": {
                                    "duration": 8.5,
                                    "resolution": "",
                                    "codec": "pcm",
                                    "bitrate": "1411kbps"
                                }
                            }
                        ]
                    }
                ]
            }
        ],
        "timeline": {
            "tracks": [
                {
                    "id": "track1",
                    "type": "video",
                    "clips": [
                        {"asset_id": "asset1", "start_time": 0, "end_time": 120, "position": 0}
                    ]
                }
            ]
        },
        "settings": {
            "resolution": "1920x1080",
            "framerate": 30,
            "output_format": "mp4"
        },
        "state": {
            "ui": {"zoom_level": 1.0, "current_time_cursor": 0}
        }
    })
}

/// JSON pointers of every value below the root, containers included.
fn all_pointers(value: &Value, prefix: String, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let pointer = format!("{prefix}/{key}");
                out.push(pointer.clone());
                all_pointers(child, pointer, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let pointer = format!("{prefix}/{index}");
                out.push(pointer.clone());
                all_pointers(child, pointer, out);
            }
        }
        _ => {}
    }
}

/// A value of a different JSON kind that no schema slot in the document
/// would accept in place of `value`.
fn wrong_kind(value: &Value) -> Value {
    match value {
        Value::String(_) => json!(7),
        Value::Number(_) => json!("7"),
        Value::Null | Value::Bool(_) => json!(7),
        Value::Array(_) => json!({}),
        Value::Object(_) => json!([]),
    }
}

// ---------------------------------------------------------------------------
// Acceptance
// ---------------------------------------------------------------------------

#[test]
fn example_project_validates() {
    let project = ProjectConfig::from_value(&example_project()).unwrap();
    assert_eq!(project.metadata.name, "Example Project");
    assert_eq!(project.settings.framerate, Some(30.0));
    assert_eq!(project.timeline.tracks[0].clips[0].end_time, 120.0);
    assert_eq!(project.all_assets().len(), 2);
    assert_eq!(project.find_asset("asset2").map(|a| a.kind), Some(MediaKind::Audio));
}

#[test]
fn parsed_document_serializes_back_to_its_input() {
    let input = example_project();
    let project = ProjectConfig::from_value(&input).unwrap();
    let back = project.to_value().unwrap();
    assert_eq!(ProjectConfig::from_value(&back).unwrap(), project);
    assert_eq!(back["assets"][1]["children"][0]["name"], json!("loops"));
}

#[test]
fn extra_fields_are_dropped() {
    let mut input = example_project();
    input["metadata"]["author"] = json!("someone");
    input["assets"][0]["thumbnail"] = json!("/t.png");
    input["unknown_section"] = json!({"x": 1});

    let with_extras = ProjectConfig::from_value(&input).unwrap();
    let plain = ProjectConfig::from_value(&example_project()).unwrap();
    assert_eq!(with_extras, plain);

    let back = with_extras.to_value().unwrap();
    assert!(back["metadata"].get("author").is_none());
    assert!(back.get("unknown_section").is_none());
}

#[test]
fn empty_assets_and_tracks_are_valid() {
    let mut input = example_project();
    input["assets"] = json!([]);
    input["timeline"]["tracks"] = json!([]);
    let project = ProjectConfig::from_value(&input).unwrap();
    assert!(project.assets.is_empty());
    assert!(project.timeline.tracks.is_empty());
}

#[test]
fn nullable_settings_accept_null() {
    let mut input = example_project();
    input["settings"] = json!({"resolution": null, "framerate": null, "output_format": null});
    input["metadata"]["cover_path"] = json!("/covers/c.png");
    let project = ProjectConfig::from_value(&input).unwrap();
    assert_eq!(project.settings.resolution, None);
    assert_eq!(project.metadata.cover_path.as_deref(), Some("/covers/c.png"));
}

#[test]
fn nested_directory_shape_is_preserved() {
    let project = ProjectConfig::from_value(&example_project()).unwrap();
    let AssetNode::Directory(music) = &project.assets[1] else {
        panic!("second entry should be a directory");
    };
    let loops = music.children[0].as_directory().unwrap();
    assert_eq!(loops.children[0].as_asset().unwrap().id, "asset2");
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[test]
fn every_single_field_corruption_is_rejected() {
    let valid = example_project();
    let mut pointers = Vec::new();
    all_pointers(&valid, String::new(), &mut pointers);
    assert!(pointers.len() > 40);

    for pointer in pointers {
        let mut corrupted = valid.clone();
        let slot = corrupted.pointer_mut(&pointer).unwrap();
        *slot = wrong_kind(slot);

        let result = project_schema().parse(&corrupted);
        assert!(result.is_err(), "corruption at {pointer} was accepted");
    }
}

#[test]
fn every_missing_field_is_rejected() {
    let valid = example_project();
    let mut pointers = Vec::new();
    all_pointers(&valid, String::new(), &mut pointers);

    for pointer in pointers {
        let (parent, key) = pointer.rsplit_once('/').unwrap();
        let mut corrupted = valid.clone();
        let container = if parent.is_empty() {
            &mut corrupted
        } else {
            corrupted.pointer_mut(parent).unwrap()
        };
        let Value::Object(map) = container else {
            continue;
        };
        map.remove(key);

        assert!(
            project_schema().parse(&corrupted).is_err(),
            "removing {pointer} was accepted"
        );
    }
}

#[test]
fn misspelled_asset_kind_is_incompatible() {
    let mut input = example_project();
    input["assets"][0]["type"] = json!("vid");
    let err = ProjectConfig::from_value(&input).unwrap_err();
    assert_eq!(err.to_string(), "media editor project is broken or incompatible");
    let schema_err = err.schema_error().unwrap();
    assert_eq!(schema_err.kind(), ErrorKind::CompositeTypeMismatch);
    assert_eq!(schema_err.expected(), project_schema().descriptor());
}

#[test]
fn foreign_entry_inside_directory_is_rejected() {
    let mut input = example_project();
    input["assets"][1]["children"][0]["children"]
        .as_array_mut()
        .unwrap()
        .push(json!({"label": "neither asset nor directory"}));
    assert!(matches!(
        ProjectConfig::from_value(&input),
        Err(ProjectError::Incompatible(_))
    ));
}

#[test]
fn string_duration_is_rejected() {
    let mut input = example_project();
    input["assets"][0]["metadata"]["duration"] = json!("120");
    assert!(ProjectConfig::from_value(&input).is_err());
}

#[test]
fn numeric_track_kind_is_rejected() {
    let mut input = example_project();
    input["timeline"]["tracks"][0]["type"] = json!(1);
    assert!(ProjectConfig::from_value(&input).is_err());
}

#[test]
fn root_must_be_an_object() {
    for bad in [json!(null), json!([]), json!("project"), json!(1)] {
        let err = ProjectConfig::from_value(&bad).unwrap_err();
        assert_eq!(err.schema_error().map(|e| e.kind()), Some(ErrorKind::CompositeTypeMismatch));
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Parsing the same document twice yields equal values.
    #[test]
    fn parse_is_pure(zoom in -10.0f64..10.0, cursor in 0.0f64..3600.0, name in "[A-Za-z0-9 ]{0,20}") {
        let mut input = example_project();
        input["state"]["ui"]["zoom_level"] = json!(zoom);
        input["state"]["ui"]["current_time_cursor"] = json!(cursor);
        input["metadata"]["name"] = json!(name);

        let first = ProjectConfig::from_value(&input).unwrap();
        let second = ProjectConfig::from_value(&input).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.state.ui.zoom_level, zoom);
    }

    /// Generated projects always pass their own schema.
    #[test]
    fn new_projects_validate(name in "\\PC{0,32}", version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", secs in 0i64..4_000_000_000) {
        let now = Timestamp::from_utc(chrono::DateTime::from_timestamp(secs, 0).unwrap());
        let project = ProjectConfig::new_at(name.clone(), version, now).unwrap();
        prop_assert_eq!(project.metadata.name.as_str(), name.as_str());
        let reparsed = ProjectConfig::from_json_str(&project.to_json_string().unwrap()).unwrap();
        prop_assert_eq!(reparsed, project);
    }
}
