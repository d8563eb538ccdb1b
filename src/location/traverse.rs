use core::iter::FusedIterator;
use crate::Zippable;
use super::Location;

/// An iterator over locations in depth-first pre-order, created by [`Location::pre_order`].
///
/// Each location yielded carries the wrappers created for the nodes visited before it, so the last one yielded sits in a tree where every node on the way has been wrapped.
///
/// [`Location::pre_order`]: struct.Location.html#method.pre_order " "
#[derive(Clone, Debug)]
pub struct PreOrder<T> {
    upcoming: Option<Location<T>>,
}
impl<T: Zippable> Iterator for PreOrder<T> {
    type Item = Location<T>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.upcoming.take()?;
        if !current.is_end() {
            self.upcoming = current.next().ok();
        }
        Some(current)
    }
}
impl<T: Zippable> FusedIterator for PreOrder<T> {}

impl<T: Zippable> Location<T> {
    /// Returns an iterator which starts at this location and follows [`next`] until the last node of the tree.
    ///
    /// The traversal is not limited to the subtree of the node in focus: once it's exhausted, the iteration continues with the following siblings and the siblings of the ancestors.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::{zip, Zippable};
    /// # #[derive(Clone, Debug, PartialEq)]
    /// # struct Node(&'static str, Option<Vec<Node>>);
    /// # impl Zippable for Node {
    /// #     type Children = Vec<Node>;
    /// #     fn children(&self) -> Option<Vec<Node>> { self.1.clone() }
    /// #     fn rebuild(&self, children: Vec<Node>) -> Node { Node(self.0, Some(children)) }
    /// # }
    /// let root = zip(Node("root", Some(vec![
    ///     Node("a", Some(vec![Node("b", None)])),
    ///     Node("c", None),
    /// ])));
    /// let names = root
    ///     .pre_order()
    ///     .map(|location| location.source().0)
    ///     .collect::<Vec<_>>();
    /// assert_eq!(names, ["root", "a", "b", "c"]);
    /// ```
    ///
    /// [`next`]: #method.next " "
    #[inline]
    pub fn pre_order(&self) -> PreOrder<T> {
        PreOrder {
            upcoming: Some(self.clone()),
        }
    }
}
