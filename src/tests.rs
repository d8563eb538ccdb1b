use super::*;
use alloc::{string::ToString, vec, vec::Vec};

/// Named test node which tells leaves apart from empty branches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) name: &'static str,
    pub(crate) children: Option<Vec<Node>>,
}
impl Zippable for Node {
    type Children = Vec<Node>;

    fn children(&self) -> Option<Vec<Node>> {
        self.children.clone()
    }
    fn rebuild(&self, children: Vec<Node>) -> Node {
        Node {
            name: self.name,
            children: Some(children),
        }
    }
}

pub(crate) fn leaf(name: &'static str) -> Node {
    Node {
        name,
        children: None,
    }
}
pub(crate) fn branch(name: &'static str, children: Vec<Node>) -> Node {
    Node {
        name,
        children: Some(children),
    }
}

/// ```text
///          root
///        /  |   \
///      a1   a2   a3 (empty branch)
///     /  \  |  \
///    b1 b2  c1 c2
/// ```
pub(crate) fn sample() -> Node {
    branch(
        "root",
        vec![
            branch("a1", vec![leaf("b1"), leaf("b2")]),
            branch("a2", vec![leaf("c1"), leaf("c2")]),
            branch("a3", vec![]),
        ],
    )
}

pub(crate) fn name(location: &Location<Node>) -> &'static str {
    location.source().name
}

/// Names of the children of the node in focus, edits included.
pub(crate) fn child_names(location: &Location<Node>) -> Vec<&'static str> {
    location
        .children_iter()
        .map(|children| children.map(|child| child.name).collect())
        .unwrap_or_default()
}

#[test]
fn error_messages() {
    assert_eq!(
        ZipperError::AlreadyAtRoot.to_string(),
        "the location already is the root of the tree",
    );
    assert_eq!(
        ZipperError::AtTraversalEnd.to_string(),
        "the node is the last one in pre-order",
    );
    // Display respects padding
    assert_eq!(
        alloc::format!("{:>40}", ZipperError::LeafHasNoChildren),
        "      expected a branch node, found leaf",
    );
}

#[test]
fn refusals_leave_receiver_intact() {
    let root = zip(sample());
    assert_eq!(root.up().unwrap_err(), ZipperError::AlreadyAtRoot);
    assert_eq!(root.left().unwrap_err(), ZipperError::AlreadyFirst);
    assert_eq!(root.right().unwrap_err(), ZipperError::AlreadyLast);
    assert_eq!(name(&root), "root");
    assert_eq!(root.child_count(), 3);
}
