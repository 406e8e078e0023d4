//! # Combinator Properties
//!
//! Cross-module checks of the engine: purity of `parse`, absence of
//! coercion between JSON kinds, and error re-labelling through several
//! layers of composites, unions and lazy schemas.

use std::sync::OnceLock;

use onlycut_schema::{
    array, boolean, field, lazy, nullable, number, object, string, union, ErrorKind, Schema,
    SchemaError, SchemaExt, SharedSchema,
};
use proptest::prelude::*;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    File { name: String, bytes: f64 },
    Folder { name: String, entries: Vec<Entry> },
}

fn entry_schema() -> &'static SharedSchema<Entry> {
    static ENTRY: OnceLock<SharedSchema<Entry>> = OnceLock::new();
    ENTRY.get_or_init(|| {
        let file = object((field("name", string()), field("bytes", number())))
            .map(|(name, bytes)| Entry::File { name, bytes });
        let folder = object((
            field("name", string()),
            field("entries", array(lazy(|| entry_schema().clone()))),
        ))
        .map(|(name, entries)| Entry::Folder { name, entries });
        union(file, folder).shared()
    })
}

/// Strategy for arbitrary JSON values, floats included.
fn any_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for well-formed entry trees.
fn entry_json() -> impl Strategy<Value = Value> {
    let file = ("[a-z]{1,8}", 0u32..100_000)
        .prop_map(|(name, bytes)| json!({"name": name, "bytes": bytes}));
    file.prop_recursive(4, 32, 5, |inner| {
        ("[a-z]{1,8}", prop::collection::vec(inner, 0..5))
            .prop_map(|(name, entries)| json!({"name": name, "entries": entries}))
    })
}

proptest! {
    /// `parse` is referentially pure.
    #[test]
    fn parse_is_pure(value in any_json()) {
        let schema = entry_schema();
        prop_assert_eq!(schema.parse(&value), schema.parse(&value));
    }

    /// Well-formed trees of any finite depth validate.
    #[test]
    fn generated_trees_validate(value in entry_json()) {
        prop_assert!(entry_schema().parse(&value).is_ok());
    }

    /// Stringified numbers are never accepted as numbers.
    #[test]
    fn numbers_are_never_coerced(n in any::<i64>()) {
        let err = number().parse(&json!(n.to_string())).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    /// Extra fields never change the result of an object parse.
    #[test]
    fn extra_fields_are_ignored(extra in prop::collection::btree_map("x[a-z]{1,5}", any_json(), 0..4)) {
        let schema = object((field("name", string()), field("bytes", number())));
        let mut input = json!({"name": "clip.mp4", "bytes": 42});
        if let Value::Object(map) = &mut input {
            map.extend(extra);
        }
        prop_assert_eq!(schema.parse(&input), Ok(("clip.mp4".to_string(), 42.0)));
    }
}

#[test]
fn tree_of_depth_three_parses_to_nested_values() {
    let input = json!({
        "name": "root",
        "entries": [
            {"name": "sub", "entries": [{"name": "a.mp4", "bytes": 10}]},
            {"name": "b.wav", "bytes": 5}
        ]
    });
    let parsed = entry_schema().parse(&input).unwrap();
    assert_eq!(
        parsed,
        Entry::Folder {
            name: "root".into(),
            entries: vec![
                Entry::Folder {
                    name: "sub".into(),
                    entries: vec![Entry::File {
                        name: "a.mp4".into(),
                        bytes: 10.0
                    }],
                },
                Entry::File {
                    name: "b.wav".into(),
                    bytes: 5.0
                },
            ],
        }
    );
}

#[test]
fn invalid_leaf_deep_in_tree_exhausts_root_union() {
    let input = json!({
        "name": "root",
        "entries": [{"name": "sub", "entries": [{"name": "a.mp4", "bytes": "10"}]}]
    });
    let err = entry_schema().parse(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnionExhausted);
    assert_eq!(err.expected(), entry_schema().descriptor());
}

#[test]
fn root_descriptor_is_structural() {
    assert_eq!(
        entry_schema().descriptor(),
        r#"union({"name":"string","bytes":"number"}|{"name":"string","entries":"lazy schema[]"})"#
    );
}

#[test]
fn nullable_inside_object_requires_presence() {
    let schema = object((field("cover", nullable(string())), field("pinned", boolean())));
    assert_eq!(
        schema.parse(&json!({"cover": null, "pinned": true})),
        Ok((None, true))
    );
    assert_eq!(
        schema.parse(&json!({"pinned": true})),
        Err(SchemaError::composite(schema.descriptor()))
    );
}
