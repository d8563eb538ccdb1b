use core::iter::FromIterator;

/// Tree nodes which can be walked and rebuilt by a zipper.
///
/// The zipper never looks inside the payload of a node. All it needs is a way to list the children of a node and a way to build a node with the same payload but a different set of children, which is what [`unzip`] uses to turn an edited [`Location`] back into a plain tree.
///
/// # Leaves and empty branches
/// A node which returns `None` from [`children`] is a *leaf*; one which returns `Some` is a *branch*, even if the collection is empty. The distinction is permanent for a given node value: children can be appended to an empty branch through a [`Location`], but never to a leaf.
///
/// # Example
/// ```rust
/// use kindling::Zippable;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Expr {
///     Num(i64),
///     Sum(Vec<Expr>),
/// }
/// impl Zippable for Expr {
///     type Children = Vec<Expr>;
///
///     fn children(&self) -> Option<Vec<Expr>> {
///         match self {
///             Expr::Num(..) => None,
///             Expr::Sum(terms) => Some(terms.clone()),
///         }
///     }
///     fn rebuild(&self, children: Vec<Expr>) -> Expr {
///         Expr::Sum(children)
///     }
/// }
///
/// assert_eq!(Expr::Num(1).children(), None);
/// assert_eq!(Expr::Sum(vec![]).children(), Some(vec![]));
/// ```
///
/// [`children`]: #tymethod.children " "
/// [`unzip`]: fn.unzip.html " "
/// [`Location`]: struct.Location.html " "
pub trait Zippable: Clone {
    /// The children of a branch node, packed into an iterable.
    ///
    /// Nodes with a variable number of children will usually use `Vec<Self>`; fixed-arity nodes can use an array-backed collection which panics when collecting too many elements.
    type Children: IntoIterator<Item = Self> + FromIterator<Self>;

    /// Returns the ordered children of the node, or `None` if it's a leaf node.
    ///
    /// The zipper calls this at most once per wrapped node and caches the result, so it's fine for this to be moderately expensive or even to compute the children on the fly.
    fn children(&self) -> Option<Self::Children>;
    /// Returns a node with the same payload as `self` but with the specified children.
    ///
    /// Only ever called on nodes for which [`children`] returned `Some`. The children may differ from the original ones in both count and contents, since they reflect the edits made through a [`Location`].
    ///
    /// [`children`]: #tymethod.children " "
    /// [`Location`]: struct.Location.html " "
    fn rebuild(&self, children: Self::Children) -> Self;
}
