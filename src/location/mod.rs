//! Locations, the cursors of a zipper.
//!
//! A [`Location`] pairs the node in focus with the context it sits in: its siblings on both sides, its parent and, transitively, all of its ancestors. Every operation on a location returns a new one and leaves the receiver untouched, so locations can be kept around, compared and branched from freely.
//!
//! The operations are split into several groups:
//! - Predicates and accessors, such as [`is_top`] or [`source`]
//! - Navigation: [`down`], [`up`], [`left`], [`right`] and the operations built on top of those
//! - Editing: [`add`], [`insert_left`], [`remove`], [`replace`] and others, see the `edit` section of the methods
//! - Paths: [`path`] and [`location`], together with the [`PathStep`] enum
//! - Pre-order traversal: [`next`], [`is_end`] and the [`pre_order`] iterator
//!
//! [`Location`]: struct.Location.html " "
//! [`PathStep`]: enum.PathStep.html " "
//! [`is_top`]: struct.Location.html#method.is_top " "
//! [`source`]: struct.Location.html#method.source " "
//! [`down`]: struct.Location.html#method.down " "
//! [`up`]: struct.Location.html#method.up " "
//! [`left`]: struct.Location.html#method.left " "
//! [`right`]: struct.Location.html#method.right " "
//! [`add`]: struct.Location.html#method.add " "
//! [`insert_left`]: struct.Location.html#method.insert_left " "
//! [`remove`]: struct.Location.html#method.remove " "
//! [`replace`]: struct.Location.html#method.replace " "
//! [`path`]: struct.Location.html#method.path " "
//! [`location`]: struct.Location.html#method.location " "
//! [`next`]: struct.Location.html#method.next " "
//! [`is_end`]: struct.Location.html#method.is_end " "
//! [`pre_order`]: struct.Location.html#method.pre_order " "

mod edit;
mod path;
mod traverse;

pub use path::PathStep;
pub use traverse::PreOrder;

use alloc::rc::Rc;
use core::{iter::FusedIterator, slice};
use crate::{
    context::{Context, Siblings},
    focus::{Child, Focus},
    util::refuse,
    Zippable,
    ZipperError,
    ZipperResult,
};

/// A position inside a tree, together with all the edits made on the way there.
///
/// Created by [`zip`]. See the [module-level documentation] for an overview of the operations.
///
/// # Example
/// ```rust
/// use kindling::{zip, unzip, Zippable};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Node(&'static str, Option<Vec<Node>>);
/// impl Zippable for Node {
///     type Children = Vec<Node>;
///     fn children(&self) -> Option<Vec<Node>> { self.1.clone() }
///     fn rebuild(&self, children: Vec<Node>) -> Node { Node(self.0, Some(children)) }
/// }
///
/// let tree = Node("root", Some(vec![
///     Node("a", None),
///     Node("b", None),
/// ]));
/// let root = zip(tree.clone());
///
/// // Move to "b" and put a new node in front of it:
/// let b = root.down()?.right()?;
/// assert_eq!(b.source().0, "b");
/// let edited = b.insert_left(vec![Node("new", None)])?;
///
/// // The original location still sees the original tree...
/// assert_eq!(root.child_count(), 2);
/// assert_eq!(unzip(&root), tree);
/// // ...while the edited one carries the change all the way up:
/// assert_eq!(
///     unzip(&edited),
///     Node("root", Some(vec![
///         Node("a", None),
///         Node("new", None),
///         Node("b", None),
///     ])),
/// );
/// # Ok::<(), kindling::ZipperError>(())
/// ```
///
/// [`zip`]: fn.zip.html " "
/// [module-level documentation]: location/index.html " "
#[derive(Debug)]
pub struct Location<T> {
    focus: Rc<Focus<T>>,
    context: Context<T>,
}
impl<T> Clone for Location<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            focus: Rc::clone(&self.focus),
            context: self.context.clone(),
        }
    }
}
impl<T: Zippable> Location<T> {
    /// Creates a location at the top of the tree rooted at the specified node.
    #[inline]
    pub(crate) fn top(root: T) -> Self {
        Self {
            focus: Rc::new(Focus::new(root)),
            context: Context::Top,
        }
    }
    #[inline]
    fn within(&self, focus: Rc<Focus<T>>) -> Self {
        Self {
            focus,
            context: self.context.clone(),
        }
    }

    /// Returns the wrapper of the node in focus, which carries all edits made to its children.
    #[inline(always)]
    pub fn focus(&self) -> &Rc<Focus<T>> {
        &self.focus
    }
    /// Returns a reference to the source node in focus.
    ///
    /// Edits made through the zipper are not reflected in the source node; use [`unzip`] to build a tree which includes them.
    ///
    /// [`unzip`]: fn.unzip.html " "
    #[inline(always)]
    pub fn source(&self) -> &T {
        self.focus.source()
    }
    /// Returns the number of children of the node in focus, which is zero for both leaves and empty branches.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.focus.child_count()
    }

    /// Returns `true` if the location is the root of the tree, `false` otherwise.
    #[inline]
    pub fn is_top(&self) -> bool {
        self.context.is_top()
    }
    /// Returns `true` if the node in focus has no siblings on the left, `false` otherwise. The root is always first.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.context.is_first()
    }
    /// Returns `true` if the node in focus has no siblings on the right, `false` otherwise. The root is always last.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.context.is_last()
    }
    /// Returns `true` if the node in focus is the last node of the tree in depth-first pre-order, `false` otherwise.
    ///
    /// This holds exactly when [`next`] fails with [`AtTraversalEnd`].
    ///
    /// [`next`]: #method.next " "
    /// [`AtTraversalEnd`]: enum.ZipperError.html#variant.AtTraversalEnd " "
    #[inline]
    pub fn is_end(&self) -> bool {
        !self.has_children() && self.context.is_last_along_spine()
    }
    /// Returns `true` if the node in focus is a *leaf*, `false` if it's a branch (even an empty one).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.focus.is_leaf()
    }
    /// Returns `true` if the node in focus is a branch with at least one child, `false` otherwise.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.focus.has_children()
    }
    /// Returns an iterator over the source nodes of the children of the node in focus, including any edits made to the list of children.
    ///
    /// # Errors
    /// Fails with [`LeafHasNoChildren`] if the node in focus is a leaf.
    ///
    /// [`LeafHasNoChildren`]: enum.ZipperError.html#variant.LeafHasNoChildren " "
    pub fn children_iter(&self) -> ZipperResult<ChildSources<'_, T>> {
        self.focus
            .children()
            .map(|children| ChildSources(children.iter()))
            .ok_or_else(|| refuse(ZipperError::LeafHasNoChildren))
    }

    /// Moves to the first child of the node in focus.
    ///
    /// # Errors
    /// Fails with [`NotABranchOrIndexOutOfRange`] if the node in focus has no children.
    ///
    /// [`NotABranchOrIndexOutOfRange`]: enum.ZipperError.html#variant.NotABranchOrIndexOutOfRange " "
    #[inline]
    pub fn down(&self) -> ZipperResult<Self> {
        self.down_at(0)
    }
    /// Moves to the child of the node in focus at the specified position.
    ///
    /// # Errors
    /// Fails with [`NotABranchOrIndexOutOfRange`] if the node in focus is a leaf or the index is out of range.
    ///
    /// [`NotABranchOrIndexOutOfRange`]: enum.ZipperError.html#variant.NotABranchOrIndexOutOfRange " "
    pub fn down_at(&self, index: usize) -> ZipperResult<Self> {
        let children = self
            .focus
            .children()
            .filter(|children| index < children.len())
            .ok_or_else(|| refuse(ZipperError::NotABranchOrIndexOutOfRange))?;
        let left = Siblings::stacked(children[..index].iter().cloned());
        let right = Siblings::stacked(children[index + 1..].iter().rev().cloned());
        Ok(Self {
            focus: children[index].clone().into_focus(),
            context: Context::frame(left, right, Rc::clone(&self.focus), self.context.clone()),
        })
    }
    /// Moves to the parent of the node in focus. The parent's children reflect all edits made at this level.
    ///
    /// # Errors
    /// Fails with [`AlreadyAtRoot`] if the location is the root of the tree.
    ///
    /// [`AlreadyAtRoot`]: enum.ZipperError.html#variant.AlreadyAtRoot " "
    #[inline]
    pub fn up(&self) -> ZipperResult<Self> {
        self.try_up()
            .ok_or_else(|| refuse(ZipperError::AlreadyAtRoot))
    }
    /// Moves to the next sibling of the node in focus.
    ///
    /// # Errors
    /// Fails with [`AlreadyLast`] if there are no siblings on the right.
    ///
    /// [`AlreadyLast`]: enum.ZipperError.html#variant.AlreadyLast " "
    #[inline]
    pub fn right(&self) -> ZipperResult<Self> {
        self.try_right()
            .ok_or_else(|| refuse(ZipperError::AlreadyLast))
    }
    /// Moves to the previous sibling of the node in focus.
    ///
    /// # Errors
    /// Fails with [`AlreadyFirst`] if there are no siblings on the left.
    ///
    /// [`AlreadyFirst`]: enum.ZipperError.html#variant.AlreadyFirst " "
    #[inline]
    pub fn left(&self) -> ZipperResult<Self> {
        self.try_left()
            .ok_or_else(|| refuse(ZipperError::AlreadyFirst))
    }
    /// Moves to the first sibling. Does nothing if the node in focus already is the first one.
    pub fn left_most(&self) -> Self {
        let mut location = self.clone();
        while let Some(previous) = location.try_left() {
            location = previous;
        }
        location
    }
    /// Moves to the last sibling. Does nothing if the node in focus already is the last one.
    pub fn right_most(&self) -> Self {
        let mut location = self.clone();
        while let Some(next) = location.try_right() {
            location = next;
        }
        location
    }
    /// Moves to the root of the tree, carrying all edits along. Does nothing if the location already is the root.
    pub fn root(&self) -> Self {
        let mut location = self.clone();
        while let Some(parent) = location.try_up() {
            location = parent;
        }
        location
    }
    /// Moves to the next node in depth-first pre-order: the first child if there is one, otherwise the next sibling of the nearest ancestor-or-self which has one.
    ///
    /// # Errors
    /// Fails with [`AtTraversalEnd`] if the node in focus is the last one in pre-order, see [`is_end`].
    ///
    /// [`AtTraversalEnd`]: enum.ZipperError.html#variant.AtTraversalEnd " "
    /// [`is_end`]: #method.is_end " "
    pub fn next(&self) -> ZipperResult<Self> {
        if self.has_children() {
            return self.down();
        }
        if self.is_end() {
            return Err(refuse(ZipperError::AtTraversalEnd));
        }
        let mut location = self.clone();
        while location.is_last() {
            location = location.up()?;
        }
        location.right()
    }

    fn try_up(&self) -> Option<Self> {
        let frame = self.context.as_frame()?;
        let children = frame.reassemble(Some(Child::Focus(Rc::clone(&self.focus))));
        Some(Self {
            focus: Rc::new(frame.parent.with_children(children)),
            context: frame.parent_context.clone(),
        })
    }
    fn try_right(&self) -> Option<Self> {
        let frame = self.context.as_frame()?;
        let (next, right) = frame.right.pop()?;
        let left = frame.left.push(Child::Focus(Rc::clone(&self.focus)));
        Some(Self {
            focus: next.clone().into_focus(),
            context: frame.with_siblings(left, right),
        })
    }
    fn try_left(&self) -> Option<Self> {
        let frame = self.context.as_frame()?;
        let (previous, left) = frame.left.pop()?;
        let right = frame.right.push(Child::Focus(Rc::clone(&self.focus)));
        Some(Self {
            focus: previous.clone().into_focus(),
            context: frame.with_siblings(left, right),
        })
    }
}

/// An iterator over the source nodes of the children of a location, created by [`Location::children_iter`].
///
/// [`Location::children_iter`]: struct.Location.html#method.children_iter " "
#[derive(Clone, Debug)]
pub struct ChildSources<'a, T>(slice::Iter<'a, Child<T>>);
impl<'a, T: Zippable> Iterator for ChildSources<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Child::source)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<T: Zippable> DoubleEndedIterator for ChildSources<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Child::source)
    }
}
impl<T: Zippable> ExactSizeIterator for ChildSources<'_, T> {}
impl<T: Zippable> FusedIterator for ChildSources<'_, T> {}
