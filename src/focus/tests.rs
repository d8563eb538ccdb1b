use super::*;
use crate::tests::{branch, leaf, sample, Node};
use alloc::vec;

#[test]
fn lazy_children() {
    let focus = Focus::new(sample());
    assert!(!focus.is_materialized());
    assert_eq!(focus.source().name, "root");
    assert!(!focus.is_materialized());

    assert_eq!(focus.child_count(), 3);
    assert!(focus.is_materialized());
    let children = focus.children().unwrap();
    assert!(children.iter().all(|child| !child.is_focus()));
    assert_eq!(children[1].source().name, "a2");
    assert!(focus.child_at(3).is_none());
}

#[test]
fn leaves_and_empty_branches() {
    let leaf = Focus::new(leaf("x"));
    assert!(leaf.is_leaf());
    assert!(!leaf.has_children());
    assert_eq!(leaf.child_count(), 0);
    assert!(leaf.children().is_none());

    let empty = Focus::new(branch("y", vec![]));
    assert!(!empty.is_leaf());
    assert!(!empty.has_children());
    assert_eq!(empty.children().map(<[_]>::len), Some(0));
}

#[test]
fn coercion_keeps_wrappers() {
    let wrapped = Rc::new(Focus::new(leaf("x")));
    let child = Child::from(Rc::clone(&wrapped));
    assert!(child.is_focus());
    assert!(Rc::ptr_eq(&child.into_focus(), &wrapped));

    let raw = Child::Source(leaf("y"));
    assert!(!raw.is_focus());
    assert_eq!(raw.into_focus().source().name, "y");
}

#[test]
fn with_children_keeps_source() {
    let focus = Focus::new(sample());
    let edited = focus.with_children(vec![Child::Source(leaf("z"))]);
    assert_eq!(edited.source(), focus.source());
    assert_eq!(edited.child_count(), 1);
    assert_eq!(edited.to_tree(), branch("root", vec![leaf("z")]));
    // The original wrapper is unaffected
    assert_eq!(focus.child_count(), 3);
}

#[test]
fn with_wrapped_keeps_children() {
    let focus = Focus::new(branch("old", vec![leaf("kept")]));
    let renamed = focus.with_wrapped(branch("new", vec![leaf("ignored"), leaf("ignored")]));
    assert_eq!(renamed.source().name, "new");
    assert_eq!(renamed.child_count(), 1);
    assert_eq!(renamed.to_tree(), branch("new", vec![leaf("kept")]));

    let leaf = Focus::new(leaf("leaf"));
    assert!(leaf.with_wrapped(branch("branch", vec![])).is_leaf());
}

#[test]
fn to_tree() {
    let untouched = Focus::new(sample());
    assert_eq!(untouched.to_tree(), sample());
    assert!(!untouched.is_materialized());

    let nested = Rc::new(Focus::new(branch("a", vec![])).with_children(vec![
        Child::Source(leaf("b")),
    ]));
    let outer = Focus::new(branch("root", vec![])).with_children(vec![
        Child::Focus(nested),
        Child::Source(leaf("c")),
    ]);
    let expected: Node = branch("root", vec![branch("a", vec![leaf("b")]), leaf("c")]);
    assert_eq!(outer.to_tree(), expected);
}
