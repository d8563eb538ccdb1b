use alloc::{rc::Rc, vec::Vec};
use core::iter;
use crate::{
    focus::{Child, Focus},
    util::refuse,
    Zippable,
    ZipperError,
    ZipperResult,
};
use super::Location;

impl<T: Zippable> Location<T> {
    /// Appends a node to the children of the node in focus.
    ///
    /// # Errors
    /// Fails with [`LeafHasNoChildren`] if the node in focus is a leaf.
    ///
    /// [`LeafHasNoChildren`]: enum.ZipperError.html#variant.LeafHasNoChildren " "
    #[inline]
    pub fn add(&self, node: T) -> ZipperResult<Self> {
        self.add_all(iter::once(node))
    }
    /// Appends the specified nodes, in order, to the children of the node in focus.
    ///
    /// # Errors
    /// Fails with [`LeafHasNoChildren`] if the node in focus is a leaf.
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
    /// let root = zip(Node("root", Some(vec![])));
    /// let grown = root.add_all(vec![Node("a", None), Node("b", None)])?;
    ///
    /// assert_eq!(root.child_count(), 0);
    /// assert_eq!(grown.child_count(), 2);
    /// assert_eq!(grown.down()?.right()?.source().0, "b");
    /// # Ok::<(), kindling::ZipperError>(())
    /// ```
    ///
    /// [`LeafHasNoChildren`]: enum.ZipperError.html#variant.LeafHasNoChildren " "
    pub fn add_all(&self, nodes: impl IntoIterator<Item = T>) -> ZipperResult<Self> {
        let children = self
            .focus
            .children()
            .ok_or_else(|| refuse(ZipperError::LeafHasNoChildren))?;
        let children = children
            .iter()
            .cloned()
            .chain(nodes.into_iter().map(Child::Source))
            .collect::<Vec<_>>();
        Ok(self.within(Rc::new(self.focus.with_children(children))))
    }
    /// Removes the child of the node in focus at the specified position.
    ///
    /// # Errors
    /// Fails with [`NotABranchOrIndexOutOfRange`] if the node in focus is a leaf or the index is out of range.
    ///
    /// [`NotABranchOrIndexOutOfRange`]: enum.ZipperError.html#variant.NotABranchOrIndexOutOfRange " "
    pub fn remove_child(&self, index: usize) -> ZipperResult<Self> {
        let children = self
            .focus
            .children()
            .filter(|children| index < children.len())
            .ok_or_else(|| refuse(ZipperError::NotABranchOrIndexOutOfRange))?;
        let children = children[..index]
            .iter()
            .chain(&children[index + 1..])
            .cloned()
            .collect::<Vec<_>>();
        Ok(self.within(Rc::new(self.focus.with_children(children))))
    }
    /// Removes all children of the node in focus, turning it into an empty branch.
    ///
    /// # Errors
    /// Fails with [`LeafHasNoChildren`] if the node in focus is a leaf.
    ///
    /// [`LeafHasNoChildren`]: enum.ZipperError.html#variant.LeafHasNoChildren " "
    pub fn clear(&self) -> ZipperResult<Self> {
        if self.is_leaf() {
            return Err(refuse(ZipperError::LeafHasNoChildren));
        }
        Ok(self.within(Rc::new(self.focus.with_children(Vec::new()))))
    }

    /// Inserts the specified nodes, in order, right before the node in focus. The focus stays where it was, so the last inserted node becomes its left neighbour.
    ///
    /// Always succeeds below the root, whatever the position of the node in focus among its siblings.
    ///
    /// # Errors
    /// Fails with [`AlreadyAtRoot`] if the location is the root of the tree, which cannot have siblings.
    ///
    /// [`AlreadyAtRoot`]: enum.ZipperError.html#variant.AlreadyAtRoot " "
    pub fn insert_left(&self, nodes: impl IntoIterator<Item = T>) -> ZipperResult<Self> {
        let frame = self
            .context
            .as_frame()
            .ok_or_else(|| refuse(ZipperError::AlreadyAtRoot))?;
        let mut left = frame.left.clone();
        for node in nodes {
            left = left.push(Child::Source(node));
        }
        Ok(Self {
            focus: Rc::clone(&self.focus),
            context: frame.with_siblings(left, frame.right.clone()),
        })
    }
    /// Inserts the specified nodes, in order, right after the node in focus. The focus stays where it was, so the first inserted node becomes its right neighbour.
    ///
    /// Always succeeds below the root, whatever the position of the node in focus among its siblings.
    ///
    /// # Errors
    /// Fails with [`AlreadyAtRoot`] if the location is the root of the tree, which cannot have siblings.
    ///
    /// [`AlreadyAtRoot`]: enum.ZipperError.html#variant.AlreadyAtRoot " "
    pub fn insert_right(&self, nodes: impl IntoIterator<Item = T>) -> ZipperResult<Self> {
        let frame = self
            .context
            .as_frame()
            .ok_or_else(|| refuse(ZipperError::AlreadyAtRoot))?;
        let nodes = nodes.into_iter().collect::<Vec<_>>();
        let mut right = frame.right.clone();
        for node in nodes.into_iter().rev() {
            right = right.push(Child::Source(node));
        }
        Ok(Self {
            focus: Rc::clone(&self.focus),
            context: frame.with_siblings(frame.left.clone(), right),
        })
    }
    /// Removes the sibling right before the node in focus.
    ///
    /// # Errors
    /// Fails with [`AlreadyFirst`] if there are no siblings on the left.
    ///
    /// [`AlreadyFirst`]: enum.ZipperError.html#variant.AlreadyFirst " "
    pub fn remove_left(&self) -> ZipperResult<Self> {
        let (frame, (_, left)) = self
            .context
            .as_frame()
            .and_then(|frame| Some((frame, frame.left.pop()?)))
            .ok_or_else(|| refuse(ZipperError::AlreadyFirst))?;
        Ok(Self {
            focus: Rc::clone(&self.focus),
            context: frame.with_siblings(left, frame.right.clone()),
        })
    }
    /// Removes the sibling right after the node in focus.
    ///
    /// # Errors
    /// Fails with [`AlreadyLast`] if there are no siblings on the right.
    ///
    /// [`AlreadyLast`]: enum.ZipperError.html#variant.AlreadyLast " "
    pub fn remove_right(&self) -> ZipperResult<Self> {
        let (frame, (_, right)) = self
            .context
            .as_frame()
            .and_then(|frame| Some((frame, frame.right.pop()?)))
            .ok_or_else(|| refuse(ZipperError::AlreadyLast))?;
        Ok(Self {
            focus: Rc::clone(&self.focus),
            context: frame.with_siblings(frame.left.clone(), right),
        })
    }
    /// Removes the node in focus and moves to its parent, whose children are the remaining siblings.
    ///
    /// # Errors
    /// Fails with [`AlreadyAtRoot`] if the location is the root of the tree.
    ///
    /// [`AlreadyAtRoot`]: enum.ZipperError.html#variant.AlreadyAtRoot " "
    pub fn remove(&self) -> ZipperResult<Self> {
        let frame = self
            .context
            .as_frame()
            .ok_or_else(|| refuse(ZipperError::AlreadyAtRoot))?;
        Ok(Self {
            focus: Rc::new(frame.parent.with_children(frame.reassemble(None))),
            context: frame.parent_context.clone(),
        })
    }

    /// Replaces the node in focus, along with all edits made to its children, with a fresh node.
    #[inline]
    pub fn replace(&self, node: T) -> Self {
        self.within(Rc::new(Focus::new(node)))
    }
    /// Replaces the node in focus with an already wrapped node, such as the focus of another location. The edits carried by the wrapper are kept.
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
    ///     Node("a", Some(vec![])),
    ///     Node("b", None),
    /// ])));
    /// // Grow "a" and graft the grown copy over "b":
    /// let grown = root.down()?.add(Node("a1", None))?;
    /// let grafted = root.down_at(1)?.replace_focus(grown.focus().clone());
    ///
    /// assert_eq!(grafted.source().0, "a");
    /// assert_eq!(grafted.down()?.source().0, "a1");
    /// # Ok::<(), kindling::ZipperError>(())
    /// ```
    #[inline]
    pub fn replace_focus(&self, focus: Rc<Focus<T>>) -> Self {
        self.within(focus)
    }
    /// Replaces only the source node in focus, keeping the children as they are, including all edits made to them.
    #[inline]
    pub fn replace_source(&self, node: T) -> Self {
        self.within(Rc::new(self.focus.with_wrapped(node)))
    }
}
