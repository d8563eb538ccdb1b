use alloc::{rc::Rc, vec::Vec};
use core::{
    fmt::{self, Formatter, Display},
    iter,
};
use crate::{focus::Focus, Zippable, ZipperResult};
use super::Location;

/// One step of a path through a tree, naming the navigation operation to perform.
///
/// Paths are produced by [`Location::path`] and replayed by [`Location::location`].
///
/// [`Location::path`]: struct.Location.html#method.path " "
/// [`Location::location`]: struct.Location.html#method.location " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Move to the first child, see [`Location::down`](struct.Location.html#method.down " ").
    Down,
    /// Move to the parent, see [`Location::up`](struct.Location.html#method.up " ").
    Up,
    /// Move to the previous sibling, see [`Location::left`](struct.Location.html#method.left " ").
    Left,
    /// Move to the next sibling, see [`Location::right`](struct.Location.html#method.right " ").
    Right,
    /// Move to the first sibling, see [`Location::left_most`](struct.Location.html#method.left_most " ").
    LeftMost,
    /// Move to the last sibling, see [`Location::right_most`](struct.Location.html#method.right_most " ").
    RightMost,
    /// Move to the next node in pre-order, see [`Location::next`](struct.Location.html#method.next " ").
    Next,
}
impl PathStep {
    /// Performs the step on the specified location.
    ///
    /// # Errors
    /// Fails with whatever error the corresponding navigation operation produces. `LeftMost` and `RightMost` never fail.
    pub fn apply<T: Zippable>(self, location: &Location<T>) -> ZipperResult<Location<T>> {
        match self {
            Self::Down => location.down(),
            Self::Up => location.up(),
            Self::Left => location.left(),
            Self::Right => location.right(),
            Self::LeftMost => Ok(location.left_most()),
            Self::RightMost => Ok(location.right_most()),
            Self::Next => location.next(),
        }
    }
}
impl Display for PathStep {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Left => "left",
            Self::Right => "right",
            Self::LeftMost => "left-most",
            Self::RightMost => "right-most",
            Self::Next => "next",
        })
    }
}

impl<T: Zippable> Location<T> {
    /// Returns a path which leads from the root of the tree to this location.
    ///
    /// Each level is encoded as a `Down` step followed by one `Right` step per sibling on the left, so replaying the path with [`location`] always lands on the node in focus, though not necessarily in the fewest steps.
    ///
    /// # Example
    /// ```rust
    /// # use kindling::{zip, PathStep, Zippable};
    /// # #[derive(Clone, Debug, PartialEq)]
    /// # struct Node(&'static str, Option<Vec<Node>>);
    /// # impl Zippable for Node {
    /// #     type Children = Vec<Node>;
    /// #     fn children(&self) -> Option<Vec<Node>> { self.1.clone() }
    /// #     fn rebuild(&self, children: Vec<Node>) -> Node { Node(self.0, Some(children)) }
    /// # }
    /// let root = zip(Node("root", Some(vec![
    ///     Node("a", None),
    ///     Node("b", Some(vec![Node("c", None)])),
    /// ])));
    /// let c = root.down_at(1)?.down()?;
    ///
    /// let path = c.path();
    /// assert_eq!(path, [PathStep::Down, PathStep::Right, PathStep::Down]);
    /// assert_eq!(root.location(&path)?.source().0, "c");
    /// # Ok::<(), kindling::ZipperError>(())
    /// ```
    ///
    /// [`location`]: #method.location " "
    pub fn path(&self) -> Vec<PathStep> {
        let mut steps = Vec::new();
        let mut context = &self.context;
        while let Some(frame) = context.as_frame() {
            // Collected bottom-up, reversed at the end
            steps.extend(iter::repeat(PathStep::Right).take(frame.left.len()));
            steps.push(PathStep::Down);
            context = &frame.parent_context;
        }
        steps.reverse();
        steps
    }
    /// Moves to the root of the tree and then performs the specified steps in order.
    ///
    /// # Errors
    /// Fails with the error of the first step which cannot be performed.
    pub fn location(&self, path: &[PathStep]) -> ZipperResult<Self> {
        path.iter()
            .try_fold(self.root(), |location, step| step.apply(&location))
    }
    /// Returns the wrappers of all nodes on the way from the root of the tree to the node in focus, both included.
    ///
    /// The ancestors reflect the edits made through this location, just like the ones reached by [`up`].
    ///
    /// [`up`]: #method.up " "
    pub fn node_path(&self) -> Vec<Rc<Focus<T>>> {
        let mut nodes = alloc::vec![Rc::clone(&self.focus)];
        let mut location = self.clone();
        while let Some(parent) = location.try_up() {
            nodes.push(Rc::clone(&parent.focus));
            location = parent;
        }
        nodes.reverse();
        nodes
    }
}
