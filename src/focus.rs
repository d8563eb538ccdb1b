//! Wrappers which decouple the nodes visited by a zipper from the source tree.
//!
//! This module is home to the following items:
//! - [`Focus`]: a node of the source tree together with a lazily materialized, zipper-owned copy of its children
//! - [`Child`]: one entry of such a copy, which is either an untouched source node or a `Focus` that has already been visited
//!
//! Every edit performed through a [`Location`] creates new `Focus` values instead of changing existing ones, which is what allows any number of locations to share the unmodified parts of a tree.
//!
//! [`Focus`]: struct.Focus.html " "
//! [`Child`]: enum.Child.html " "
//! [`Location`]: ../struct.Location.html " "

use alloc::{rc::Rc, vec::Vec};
use core::cell::OnceCell;
use crate::Zippable;

/// A node of the source tree, wrapped for use by a zipper.
///
/// The children of the wrapped node are queried the first time they are needed and cached from then on; the cached sequence is authoritative for this wrapper regardless of what the source node reports later. Since the cache is a [`OnceCell`], wrappers cannot be shared between threads.
///
/// # Example
/// ```rust
/// use kindling::{Focus, Zippable};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Dir(&'static str, Vec<Dir>);
/// impl Zippable for Dir {
///     type Children = Vec<Dir>;
///     fn children(&self) -> Option<Vec<Dir>> { Some(self.1.clone()) }
///     fn rebuild(&self, children: Vec<Dir>) -> Dir { Dir(self.0, children) }
/// }
///
/// let focus = Focus::new(Dir("src", vec![Dir("lib.rs", vec![])]));
/// // Nothing has been asked of the source node yet:
/// assert!(!focus.is_materialized());
/// assert_eq!(focus.child_count(), 1);
/// assert!(focus.is_materialized());
/// assert_eq!(focus.child_at(0).unwrap().source().0, "lib.rs");
/// ```
///
/// [`OnceCell`]: https://doc.rust-lang.org/core/cell/struct.OnceCell.html " "
#[derive(Debug)]
pub struct Focus<T> {
    source: T,
    // None inside the cell marks a leaf
    children: OnceCell<Option<Rc<[Child<T>]>>>,
}
impl<T: Zippable> Focus<T> {
    /// Wraps the specified node. Its children are not queried until one of the accessors needs them.
    #[inline]
    pub fn new(source: T) -> Self {
        Self {
            source,
            children: OnceCell::new(),
        }
    }
    #[inline]
    fn with_materialized(source: T, children: Option<Rc<[Child<T>]>>) -> Self {
        Self {
            source,
            children: OnceCell::from(children),
        }
    }

    /// Returns a reference to the wrapped node.
    ///
    /// The children reported by the wrapped node do not reflect edits made through the zipper; use [`children`] for that.
    ///
    /// [`children`]: #method.children " "
    #[inline(always)]
    pub fn source(&self) -> &T {
        &self.source
    }
    /// Returns `true` if the children of the wrapped node have already been queried, `false` otherwise.
    #[inline]
    pub fn is_materialized(&self) -> bool {
        self.children.get().is_some()
    }
    /// Returns `true` if the node is a *leaf*, `false` if it's a branch (even an empty one).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.materialized().is_none()
    }
    /// Returns `true` if the node is a branch with at least one child, `false` otherwise.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.materialized().map_or(false, |children| !children.is_empty())
    }
    /// Returns the number of children, which is zero for both leaves and empty branches.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.materialized().map_or(0, |children| children.len())
    }
    /// Returns the child at the specified position, or `None` if the node is a leaf or the index is out of range.
    #[inline]
    pub fn child_at(&self, index: usize) -> Option<&Child<T>> {
        self.materialized()?.get(index)
    }
    /// Returns the children of the node as seen by the zipper, or `None` if it's a leaf.
    ///
    /// The entries are a mix of source nodes and wrappers, depending on which children have already been visited.
    #[inline]
    pub fn children(&self) -> Option<&[Child<T>]> {
        self.materialized().map(|children| &children[..])
    }

    /// Creates a branch wrapper for the same source node, but with the specified children.
    #[inline]
    pub fn with_children(&self, children: impl Into<Rc<[Child<T>]>>) -> Self {
        Self::with_materialized(self.source.clone(), Some(children.into()))
    }
    /// Creates a wrapper for a different source node, but with the children of this wrapper.
    ///
    /// The children are materialized from the *current* source first, so edits made to them are kept and the new source is never asked for its children. A leaf stays a leaf even if the new source is a branch.
    #[inline]
    pub fn with_wrapped(&self, source: T) -> Self {
        Self::with_materialized(source, self.materialized().cloned())
    }

    /// Builds a plain tree out of the wrapper, applying all edits made to its children.
    ///
    /// Wrappers which were never materialized return a clone of their source node, sharing whatever the source node shares. The source tree is never modified.
    pub fn to_tree(&self) -> T {
        match self.children.get() {
            Some(Some(children)) => self
                .source
                .rebuild(children.iter().map(Child::to_tree).collect()),
            _ => self.source.clone(),
        }
    }

    fn materialized(&self) -> Option<&Rc<[Child<T>]>> {
        self.children
            .get_or_init(|| {
                self.source.children().map(|children| {
                    children
                        .into_iter()
                        .map(Child::Source)
                        .collect::<Vec<_>>()
                        .into()
                })
            })
            .as_ref()
    }
}

impl<T> Drop for Focus<T> {
    fn drop(&mut self) {
        // Empty the caches of uniquely owned descendants from a heap stack, so
        // that deeply unfolded trees don't drop recursively
        let mut pending = self.children.take().flatten().into_iter().collect::<Vec<_>>();
        while let Some(mut children) = pending.pop() {
            let children = match Rc::get_mut(&mut children) {
                Some(children) => children,
                None => continue,
            };
            for child in children.iter_mut() {
                if let Child::Focus(focus) = child {
                    if let Some(focus) = Rc::get_mut(focus) {
                        pending.extend(focus.children.take().flatten());
                    }
                }
            }
        }
    }
}

/// An entry in the children of a [`Focus`].
///
/// Only children which have been visited by a zipper are wrapped; the rest are kept as they were found in the source tree.
///
/// [`Focus`]: struct.Focus.html " "
#[derive(Clone, Debug)]
pub enum Child<T> {
    /// A node of the source tree which has not been visited yet.
    Source(T),
    /// A node which has been visited and possibly edited.
    Focus(Rc<Focus<T>>),
}
impl<T: Zippable> Child<T> {
    /// Returns a reference to the source node, unwrapping it if the child has been visited.
    #[inline]
    pub fn source(&self) -> &T {
        match self {
            Self::Source(source) => source,
            Self::Focus(focus) => focus.source(),
        }
    }
    /// Returns `true` if the child has been visited, `false` otherwise.
    #[inline]
    pub fn is_focus(&self) -> bool {
        matches!(self, Self::Focus(..))
    }
    /// Returns the child as a wrapper, wrapping it if it hasn't been visited yet. Wrappers are passed through unchanged.
    #[inline]
    pub fn into_focus(self) -> Rc<Focus<T>> {
        match self {
            Self::Source(source) => Rc::new(Focus::new(source)),
            Self::Focus(focus) => focus,
        }
    }
    /// Builds a plain tree out of the child. See [`Focus::to_tree`].
    ///
    /// [`Focus::to_tree`]: struct.Focus.html#method.to_tree " "
    #[inline]
    pub fn to_tree(&self) -> T {
        match self {
            Self::Source(source) => source.clone(),
            Self::Focus(focus) => focus.to_tree(),
        }
    }
}
impl<T> From<Rc<Focus<T>>> for Child<T> {
    #[inline(always)]
    fn from(op: Rc<Focus<T>>) -> Self {
        Self::Focus(op)
    }
}

#[cfg(test)]
mod tests;
