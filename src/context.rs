//! The chain of ancestors a location sits in.

use alloc::{rc::Rc, vec::Vec};
use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
    mem,
};
use crate::focus::{Child, Focus};

/// A persistent stack of siblings.
///
/// Pushing and popping never touch the existing links, so every location derived from another one shares the untouched part of the stack with it. The top of the stack is always the sibling closest to the focus.
pub(crate) struct Siblings<T> {
    head: Option<Rc<Link<T>>>,
    len: usize,
}
struct Link<T> {
    item: Child<T>,
    next: Option<Rc<Link<T>>>,
}
impl<T> Siblings<T> {
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        Self { head: None, len: 0 }
    }
    /// Builds a stack by pushing the items in order, so that the last one ends up on top.
    pub(crate) fn stacked(items: impl IntoIterator<Item = Child<T>>) -> Self {
        let mut stack = Self::new();
        for item in items {
            stack = stack.push(item);
        }
        stack
    }
    #[inline(always)]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }
    #[inline(always)]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }
    #[inline]
    pub(crate) fn push(&self, item: Child<T>) -> Self {
        Self {
            head: Some(Rc::new(Link {
                item,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }
    /// Returns the nearest sibling and the stack without it, or `None` if the stack is empty.
    #[inline]
    pub(crate) fn pop(&self) -> Option<(&Child<T>, Self)> {
        self.head.as_ref().map(|link| {
            let rest = Self {
                head: link.next.clone(),
                len: self.len - 1,
            };
            (&link.item, rest)
        })
    }
    /// Iterates from the nearest sibling to the farthest one.
    #[inline]
    pub(crate) fn iter(&self) -> SiblingsIter<'_, T> {
        SiblingsIter {
            link: self.head.as_deref(),
            remaining: self.len,
        }
    }
}
impl<T> Clone for Siblings<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}
impl<T> Drop for Siblings<T> {
    fn drop(&mut self) {
        // Unlink iteratively, recursive drops overflow on wide trees
        let mut head = self.head.take();
        while let Some(link) = head {
            match Rc::try_unwrap(link) {
                Ok(mut link) => head = link.next.take(),
                Err(..) => break,
            }
        }
    }
}
impl<T: Debug> Debug for Siblings<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub(crate) struct SiblingsIter<'a, T> {
    link: Option<&'a Link<T>>,
    remaining: usize,
}
impl<'a, T> Iterator for SiblingsIter<'a, T> {
    type Item = &'a Child<T>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let link = self.link.take()?;
        self.link = link.next.as_deref();
        self.remaining -= 1;
        Some(&link.item)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> ExactSizeIterator for SiblingsIter<'_, T> {}
impl<T> FusedIterator for SiblingsIter<'_, T> {}

/// Where a location sits in the tree: either the top of the tree or a frame inside its parent.
#[derive(Debug)]
pub(crate) enum Context<T> {
    Top,
    Frame(Rc<Frame<T>>),
}
/// One level of the ancestor chain.
#[derive(Debug)]
pub(crate) struct Frame<T> {
    /// Siblings before the focus, nearest on top.
    pub(crate) left: Siblings<T>,
    /// Siblings after the focus, nearest on top.
    pub(crate) right: Siblings<T>,
    /// The parent node as it was when the frame was entered.
    pub(crate) parent: Rc<Focus<T>>,
    pub(crate) parent_context: Context<T>,
}
impl<T> Context<T> {
    #[inline]
    pub(crate) fn frame(
        left: Siblings<T>,
        right: Siblings<T>,
        parent: Rc<Focus<T>>,
        parent_context: Context<T>,
    ) -> Self {
        Self::Frame(Rc::new(Frame {
            left,
            right,
            parent,
            parent_context,
        }))
    }
    #[inline]
    pub(crate) fn as_frame(&self) -> Option<&Frame<T>> {
        match self {
            Self::Top => None,
            Self::Frame(frame) => Some(&**frame),
        }
    }
    #[inline]
    pub(crate) fn is_top(&self) -> bool {
        matches!(self, Self::Top)
    }
    #[inline]
    pub(crate) fn is_first(&self) -> bool {
        self.as_frame().map_or(true, |frame| frame.left.is_empty())
    }
    #[inline]
    pub(crate) fn is_last(&self) -> bool {
        self.as_frame().map_or(true, |frame| frame.right.is_empty())
    }
    /// Returns `true` if this frame and every frame above it have no siblings on the right.
    pub(crate) fn is_last_along_spine(&self) -> bool {
        let mut context = self;
        while let Self::Frame(frame) = context {
            if !frame.right.is_empty() {
                return false;
            }
            context = &frame.parent_context;
        }
        true
    }
}
impl<T> Clone for Context<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Top => Self::Top,
            Self::Frame(frame) => Self::Frame(Rc::clone(frame)),
        }
    }
}
impl<T> Drop for Frame<T> {
    fn drop(&mut self) {
        // Unlink iteratively, recursive drops overflow on deep trees
        let mut context = mem::replace(&mut self.parent_context, Context::Top);
        while let Context::Frame(frame) = context {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => {
                    context = mem::replace(&mut frame.parent_context, Context::Top);
                }
                Err(..) => break,
            }
        }
    }
}
impl<T: Clone> Frame<T> {
    /// Creates a context in the same parent, but with different siblings.
    #[inline]
    pub(crate) fn with_siblings(&self, left: Siblings<T>, right: Siblings<T>) -> Context<T> {
        Context::frame(
            left,
            right,
            Rc::clone(&self.parent),
            self.parent_context.clone(),
        )
    }
    /// Reassembles the full child sequence of the parent, with the specified child in place of the focus. Passing `None` drops the focus from the sequence.
    pub(crate) fn reassemble(&self, focus: Option<Child<T>>) -> Vec<Child<T>> {
        let mut children = Vec::with_capacity(self.left.len() + self.right.len() + 1);
        children.extend(self.left.iter().cloned());
        children.reverse();
        children.extend(focus);
        children.extend(self.right.iter().cloned());
        children
    }
}

#[cfg(test)]
mod tests;
