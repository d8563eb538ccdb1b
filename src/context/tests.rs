use super::*;
use crate::{
    tests::{leaf, sample, Node},
    zip,
    Zippable,
};
use alloc::vec;

/// Unary chain whose clones share the rest of the chain.
#[derive(Clone, Debug)]
struct Chain {
    next: Option<Rc<Chain>>,
}
impl Zippable for Chain {
    type Children = Vec<Chain>;

    fn children(&self) -> Option<Vec<Chain>> {
        self.next.as_ref().map(|next| vec![Chain::clone(next)])
    }
    fn rebuild(&self, children: Vec<Chain>) -> Chain {
        Chain {
            next: children.into_iter().next().map(Rc::new),
        }
    }
}

/// Builds a chain of the specified depth, returning every link with the top one first.
///
/// Dropping the links in order frees each one while the next is still held, so the chain itself never drops recursively.
fn chain(depth: usize) -> Vec<Rc<Chain>> {
    let mut links = vec![Rc::new(Chain { next: None })];
    for _ in 0..depth {
        let below = links.last().map(Rc::clone);
        links.push(Rc::new(Chain { next: below }));
    }
    links.reverse();
    links
}

fn names(siblings: &Siblings<Node>) -> Vec<&'static str> {
    siblings.iter().map(|child| child.source().name).collect()
}

#[test]
fn stack_order() {
    let stack = Siblings::stacked(vec![
        Child::Source(leaf("a")),
        Child::Source(leaf("b")),
        Child::Source(leaf("c")),
    ]);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.iter().len(), 3);
    assert_eq!(names(&stack), ["c", "b", "a"]);

    let (top, rest) = stack.pop().unwrap();
    assert_eq!(top.source().name, "c");
    assert_eq!(names(&rest), ["b", "a"]);
    // Popping leaves the original stack alone
    assert_eq!(stack.len(), 3);
    assert!(Siblings::<Node>::new().pop().is_none());
}

#[test]
fn shared_tails() {
    let base = Siblings::stacked(vec![Child::Source(leaf("a"))]);
    let one = base.push(Child::Source(leaf("b")));
    let other = base.push(Child::Source(leaf("c")));
    assert_eq!(names(&one), ["b", "a"]);
    assert_eq!(names(&other), ["c", "a"]);
    assert_eq!(names(&base), ["a"]);
}

#[test]
fn wide_stack_drops() {
    let wide = Siblings::stacked((0..200_000).map(|_| Child::Source(leaf("x"))));
    assert_eq!(wide.len(), 200_000);
    drop(wide);
}

#[test]
fn deep_chain_drops() {
    const DEPTH: usize = 100_000;
    let links = chain(DEPTH);

    let mut bottom = zip(Chain::clone(&links[0]));
    while let Ok(child) = bottom.down() {
        bottom = child;
    }
    assert!(bottom.is_leaf());
    assert_eq!(bottom.path().len(), DEPTH);
    drop(bottom);

    let unfolded = zip(Chain::clone(&links[0])).down().unwrap().unfold();
    assert!(unfolded.is_top());
    assert!(unfolded.focus().child_at(0).unwrap().is_focus());
    drop(unfolded);
}

#[test]
fn frames() {
    let parent = Rc::new(Focus::new(sample()));
    let top = Context::<Node>::Top;
    assert!(top.is_top() && top.is_first() && top.is_last());
    assert!(top.is_last_along_spine());

    let context = Context::frame(
        Siblings::stacked(vec![Child::Source(leaf("a1"))]),
        Siblings::stacked(vec![Child::Source(leaf("a3"))]),
        parent,
        Context::Top,
    );
    assert!(!context.is_top());
    assert!(!context.is_first());
    assert!(!context.is_last());
    assert!(!context.is_last_along_spine());

    let frame = context.as_frame().unwrap();
    let children = frame.reassemble(Some(Child::Source(leaf("a2"))));
    let order = children.iter().map(|child| child.source().name).collect::<Vec<_>>();
    assert_eq!(order, ["a1", "a2", "a3"]);
    assert_eq!(frame.reassemble(None).len(), 2);

    let last = frame.with_siblings(frame.left.clone(), Siblings::new());
    assert!(last.is_last() && last.is_last_along_spine());
}
