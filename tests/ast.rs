//! Tests for the node model: wire round trips, structural edits and
//! canonicalization.
mod common;
use common::*;
use serde_json::json;
use shinsa::ast::dto;
use shinsa::prelude::*;

#[test]
fn test_round_trip_parse_serialize() {
    let tree = AstNode::operator("OR").with_child(
        AstNode::operator("AND")
            .with_child(amount_rule(1000.0))
            .with_child(
                AstNode::operator("IS_IN_LIST")
                    .with_named_child("value", payload_accessor("country"))
                    .with_named_child(
                        "list",
                        AstNode::constant(vec![
                            ConstantValue::String("FR".to_string()),
                            ConstantValue::String("DE".to_string()),
                        ]),
                    ),
            ),
    );

    let round_tripped = dto::parse(dto::serialize(&tree));
    assert_eq!(round_tripped, tree);
}

#[test]
fn test_round_trip_through_json_text() {
    let tree = canonical_amount_rule(1000.0);
    let payload = serde_json::to_string(&dto::serialize(&tree)).expect("serializes");

    let parsed: AstNodeDto = serde_json::from_str(&payload).expect("deserializes");
    assert_eq!(dto::parse(parsed), tree);
}

#[test]
fn test_dto_parse_defaults_missing_fields() {
    let wire: AstNodeDto = serde_json::from_str("{}").expect("empty object deserializes");
    let node = dto::parse(wire);
    assert_eq!(node.name, None);
    assert_eq!(node.constant, None);
    assert!(node.children.is_empty());
    assert!(node.named_children.is_empty());
}

#[test]
fn test_parse_json_defaults_malformed_fields() {
    // A numeric name, scalar children and an array where an object belongs
    // all default instead of erroring.
    let document = json!({
        "name": 42,
        "constant": null,
        "children": "nope",
        "named_children": []
    });

    let node = dto::parse_json(&document);
    assert_eq!(node.name, None);
    assert_eq!(node.constant, None);
    assert!(node.children.is_empty());
    assert!(node.named_children.is_empty());
}

#[test]
fn test_parse_json_reads_nested_payload() {
    let document = json!({
        "name": "GREATER",
        "constant": null,
        "children": [
            {
                "name": "Payload",
                "children": [{ "constant": "amount" }]
            },
            { "constant": 1000.0 }
        ],
        "named_children": {}
    });

    let node = dto::parse_json(&document);
    assert_eq!(node, amount_rule(1000.0));
}

#[test]
fn test_node_at_walks_positional_and_named_segments() {
    let tree = AstNode::operator("OR").with_child(
        AstNode::operator("AND").with_child(
            AstNode::operator("IS_IN_LIST")
                .with_named_child("value", payload_accessor("country"))
                .with_named_child("list", AstNode::constant(Vec::<ConstantValue>::new())),
        ),
    );

    let path = NodePath::root().child(0).child(0).named("value");
    let node = tree.node_at(&path).expect("path should resolve");
    assert!(node.is_operator("Payload"));

    assert!(tree.node_at(&NodePath::root().child(2)).is_none());
}

#[test]
fn test_replace_at_builds_a_fresh_tree() {
    let original = canonical_amount_rule(1000.0);
    let path = NodePath::root().child(0).child(0);

    let edited = original
        .replace_at(&path, amount_rule(50.0))
        .expect("path should resolve");

    // The edit landed in the new tree and left the original intact.
    assert_eq!(edited.node_at(&path), Some(&amount_rule(50.0)));
    assert_eq!(original, canonical_amount_rule(1000.0));
    assert_ne!(edited, original);
}

#[test]
fn test_replace_at_stale_path_is_an_error() {
    let tree = canonical_amount_rule(1000.0);
    let stale = NodePath::root().child(0).child(7);

    let result = tree.replace_at(&stale, AstNode::undefined());
    match result {
        Err(EditError::PathNotFound { path }) => assert_eq!(path, stale),
        Ok(_) => panic!("Expected a stale-path error"),
    }
}

#[test]
fn test_wrap_always_yields_a_group() {
    // Including an input that is itself already a group.
    let samples = vec![
        AstNode::constant(true),
        amount_rule(10.0),
        AstNode::undefined(),
        AstNode::operator("OR"),
        canonical_amount_rule(10.0),
    ];

    for sample in samples {
        assert!(is_or_and_group(&wrap_in_or_and_groups(sample)));
    }
}

#[test]
fn test_group_detection_is_conservative() {
    // An OR with no children is not a group.
    assert!(!is_or_and_group(&AstNode::operator("OR")));

    // An OR with any non-AND child is not a group.
    let mixed = AstNode::operator("OR")
        .with_child(AstNode::operator("AND"))
        .with_child(AstNode::operator("NOT").with_child(AstNode::constant(true)));
    assert!(!is_or_and_group(&mixed));

    // A bare clause is not a group either.
    assert!(!is_or_and_group(&amount_rule(10.0)));
}

#[test]
fn test_normalize_is_idempotent() {
    let group = canonical_amount_rule(1000.0);
    assert_eq!(normalize(group.clone()), group);

    let wrapped = normalize(amount_rule(1000.0));
    assert!(is_or_and_group(&wrapped));
    assert_eq!(normalize(wrapped.clone()), wrapped);
}

#[test]
fn test_display_tree_is_stable() {
    let tree = AstNode::operator("AND")
        .with_child(AstNode::constant(true))
        .with_child(amount_rule(25.0));

    let rendered = format!("{}", DisplayAstNode { node: &tree });
    let expected = "\
└── AND
    ├── Constant: true
    └── GREATER
        ├── Payload
        │   └── Constant: amount
        └── Constant: 25
";
    assert_eq!(rendered, expected);
}
