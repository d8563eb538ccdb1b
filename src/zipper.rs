//! Entering and leaving a zipper.

use crate::{Location, Zippable};

/// Creates a zipper over the tree rooted at the specified node, returning the location of the root.
///
/// This does not walk the tree: nodes are wrapped one by one as locations move to them.
#[inline]
pub fn zip<T: Zippable>(root: T) -> Location<T> {
    Location::top(root)
}

/// Builds a plain tree out of the tree a location sits in, applying all edits made on the way to it.
///
/// Works from any location, not only the root. The tree passed to [`zip`] is never modified: nodes with edited children are created anew with [`Zippable::rebuild`], and subtrees which were never visited are cloned from the source.
///
/// # Example
/// ```rust
/// # use kindling::{zip, unzip, Zippable};
/// # #[derive(Clone, Debug, PartialEq)]
/// # struct Node(&'static str, Option<Vec<Node>>);
/// # impl Zippable for Node {
/// #     type Children = Vec<Node>;
/// #     fn children(&self) -> Option<Vec<Node>> { self.1.clone() }
/// #     fn rebuild(&self, children: Vec<Node>) -> Node { Node(self.0, Some(children)) }
/// # }
/// let tree = Node("root", Some(vec![Node("a", Some(vec![]))]));
/// let edited = zip(tree.clone()).down()?.add(Node("b", None))?;
///
/// assert_eq!(
///     unzip(&edited),
///     Node("root", Some(vec![Node("a", Some(vec![Node("b", None)]))])),
/// );
/// // The original tree is left alone:
/// assert_eq!(tree, Node("root", Some(vec![Node("a", Some(vec![]))])));
/// # Ok::<(), kindling::ZipperError>(())
/// ```
///
/// [`zip`]: fn.zip.html " "
/// [`Zippable::rebuild`]: trait.Zippable.html#tymethod.rebuild " "
#[tracing::instrument(level = "debug", skip_all)]
pub fn unzip<T: Zippable>(location: &Location<T>) -> T {
    location.root().focus().to_tree()
}

/// Visits every node of the tree a location sits in, returning the root of a tree in which every node is wrapped.
///
/// Afterwards, the children of every [`Focus`] in the tree are [`Child::Focus`] entries. The traversal starts at the root regardless of the location passed in.
///
/// [`Focus`]: focus/struct.Focus.html " "
/// [`Child::Focus`]: focus/enum.Child.html#variant.Focus " "
#[tracing::instrument(level = "debug", skip_all)]
pub fn unfold<T: Zippable>(location: &Location<T>) -> Location<T> {
    let mut visited = 1_usize;
    let mut location = location.root();
    while !location.is_end() {
        location = match location.next() {
            Ok(next) => next,
            Err(..) => break,
        };
        visited += 1;
    }
    tracing::debug!(visited, "unfolded tree");
    location.root()
}

impl<T: Zippable> Location<T> {
    /// Builds a plain tree out of the tree this location sits in. See [`unzip`].
    ///
    /// [`unzip`]: fn.unzip.html " "
    #[inline(always)]
    pub fn unzip(&self) -> T {
        unzip(self)
    }
    /// Visits every node of the tree, wrapping it. See [`unfold`].
    ///
    /// [`unfold`]: fn.unfold.html " "
    #[inline(always)]
    pub fn unfold(&self) -> Self {
        unfold(self)
    }
}
