//! Implements persistent zippers for navigating and editing arbitrary ordered trees.
//!
//! # Overview
//! A zipper is a cursor into a tree which knows how to rebuild the tree around itself. Kindling's zipper works on top of *any* tree, as long as its nodes implement [`Zippable`], a trait with one method listing the children of a node and one building a copy of a node with different children. The tree passed to [`zip`] is never modified; instead, every movement and every edit produces a new [`Location`] which shares all of the unchanged parts with the locations it was derived from.
//!
//! Because of that, any number of locations can be taken from the same tree and edited independently of each other: an edit is only ever visible through the location it produced and the ones derived from it afterwards. Once done, [`unzip`] turns a location back into a plain tree.
//!
//! # Example
//! ```rust
//! use kindling::{zip, unzip, Zippable};
//!
//! // A tree where every node is named and leaves are distinct from empty branches:
//! #[derive(Clone, Debug, PartialEq)]
//! struct Node {
//!     name: &'static str,
//!     children: Option<Vec<Node>>,
//! }
//! impl Zippable for Node {
//!     type Children = Vec<Node>;
//!
//!     fn children(&self) -> Option<Vec<Node>> {
//!         self.children.clone()
//!     }
//!     fn rebuild(&self, children: Vec<Node>) -> Node {
//!         Node { name: self.name, children: Some(children) }
//!     }
//! }
//! fn leaf(name: &'static str) -> Node {
//!     Node { name, children: None }
//! }
//! fn branch(name: &'static str, children: Vec<Node>) -> Node {
//!     Node { name, children: Some(children) }
//! }
//!
//! let tree = branch("root", vec![
//!     branch("a", vec![leaf("b"), leaf("c")]),
//!     branch("d", vec![leaf("e")]),
//! ]);
//! let root = zip(tree.clone());
//!
//! // Move to "e" and add a sibling right after it:
//! let e = root.down()?.right()?.down()?;
//! assert_eq!(e.source().name, "e");
//! let f = e.insert_right(vec![leaf("f")])?;
//!
//! // Move back up and add a sibling in front of "d":
//! let g = f.up()?.insert_left(vec![leaf("g")])?;
//!
//! assert_eq!(unzip(&e), tree);
//! assert_eq!(
//!     unzip(&g),
//!     branch("root", vec![
//!         branch("a", vec![leaf("b"), leaf("c")]),
//!         leaf("g"),
//!         branch("d", vec![leaf("e"), leaf("f")]),
//!     ]),
//! );
//! # Ok::<(), kindling::ZipperError>(())
//! ```
//!
//! # Sharing and laziness
//! Nodes are wrapped in a [`Focus`] only when a location moves to them, and a wrapper asks its node for the children only once, when they are first needed. Siblings and ancestors are kept in persistent linked lists, so moving sideways and editing siblings never copies the sibling list. Moving up does rebuild the parent's list of children, which takes time proportional to the number of siblings.
//!
//! Wrappers cache the children of their nodes in a [`OnceCell`], which makes locations unusable across threads. Locations are meant to be cheap values used by a single thread.
//!
//! # Feature flags
//! - `std` (**enabled by default**): implements the [`Error`] trait for [`ZipperError`] and enables the standard library support of `tracing`. Without it, the crate is `no_std`, but still requires a global allocator.
//! - `doc_cfg`: annotates feature-gated items in the documentation. **Requires a nightly compiler** and is only meant for docs.rs.
//!
//! # Logging
//! Kindling emits [`tracing`] events and never installs a subscriber: refused moves are reported at the `trace` level, and [`unzip`] and [`unfold`] are instrumented at the `debug` level.
//!
//! [`Zippable`]: trait.Zippable.html " "
//! [`Location`]: struct.Location.html " "
//! [`Focus`]: focus/struct.Focus.html " "
//! [`ZipperError`]: enum.ZipperError.html " "
//! [`zip`]: fn.zip.html " "
//! [`unzip`]: fn.unzip.html " "
//! [`unfold`]: fn.unfold.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`OnceCell`]: https://doc.rust-lang.org/core/cell/struct.OnceCell.html " "
//! [`tracing`]: https://docs.rs/tracing/*/tracing/ " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

mod context;
pub mod focus;
pub mod location;
mod node;
mod zipper;

#[doc(no_inline)]
pub use focus::{Child, Focus};
#[doc(no_inline)]
pub use location::{ChildSources, Location, PathStep, PreOrder};
pub use node::Zippable;
pub use zipper::{zip, unzip, unfold};

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};

/// The error type returned by fallible operations on a [`Location`].
///
/// All of those errors are caused by asking a location to do something its position in the tree doesn't allow; the location the operation was called on stays valid and unchanged.
///
/// [`Location`]: struct.Location.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZipperError {
    /// The node in focus is a leaf or has fewer children than the index requires.
    NotABranchOrIndexOutOfRange,
    /// The node in focus is a leaf, which cannot have children by definition.
    LeafHasNoChildren,
    /// The location is the root of the tree, which has neither a parent nor siblings.
    AlreadyAtRoot,
    /// The node in focus has no siblings on the left.
    AlreadyFirst,
    /// The node in focus has no siblings on the right.
    AlreadyLast,
    /// The node in focus is the last node of the tree in depth-first pre-order.
    AtTraversalEnd,
}
impl Display for ZipperError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NotABranchOrIndexOutOfRange => {
                "the node does not have any children or the index is out of range"
            }
            Self::LeafHasNoChildren => "expected a branch node, found leaf",
            Self::AlreadyAtRoot => "the location already is the root of the tree",
            Self::AlreadyFirst => "the node already is the first of its siblings",
            Self::AlreadyLast => "the node already is the last of its siblings",
            Self::AtTraversalEnd => "the node is the last one in pre-order",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for ZipperError {}

/// A result type for operations on a [`Location`] which can be refused.
///
/// [`Location`]: struct.Location.html " "
pub type ZipperResult<T> = Result<T, ZipperError>;

#[cfg(test)]
mod tests;
