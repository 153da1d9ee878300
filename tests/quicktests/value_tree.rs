use classic_ds::value_tree::Node;
use classic_ds::ParseError;

use crate::init_logging;

fn root_left_right(right: &str) -> Node {
    Node::new("root")
        .with_left(Node::new("left"))
        .with_right(Node::new(right))
}

#[test]
fn equality_is_structural() {
    assert_eq!(root_left_right("right"), root_left_right("right"));
    assert_ne!(root_left_right("right"), root_left_right("other"));
}

#[test]
fn round_trips_through_the_text_format() {
    init_logging();
    let tree = Node::new("root")
        .with_left(Node::new("left").with_left(Node::new("left.left")))
        .with_right(Node::new("right"));

    let serialized = tree.serialize();
    assert_eq!(Node::deserialize(&serialized), Ok(tree.clone()));
    assert_eq!(serialized.parse::<Node>(), Ok(tree));
}

#[test]
fn deserializes_literal_fixture() {
    let input = r#"{ "val": "root", "left": { "val": "left", "left": null, "right": null }, "right": { "val": "right", "left": null, "right": null } }"#;

    assert_eq!(Node::deserialize(input), Ok(root_left_right("right")));
}

#[test]
fn rejects_general_json() {
    init_logging();
    let input = r#"{"val":"root","left":null,"right":null}"#;

    assert!(matches!(
        Node::deserialize(input),
        Err(ParseError::Expected { position: 0, .. })
    ));
}

#[test]
fn unival_counts() {
    assert_eq!(Node::new("leaf").count_unival_subtrees(), 1);

    let same = Node::new("x")
        .with_left(Node::new("x"))
        .with_right(Node::new("x").with_left(Node::new("x")));
    assert_eq!(same.count_unival_subtrees(), 4);

    assert_eq!(root_left_right("right").count_unival_subtrees(), 2);
}
