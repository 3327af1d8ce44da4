//! This crate is a small interactive dictionary of classic data structures, mostly for
//! educational purposes. Each topic comes with a short explanation and a live demonstration on
//! integers the user types in.
//!
//! ## Binary Trees
//!
//! A binary tree is built out of `Node`s. A `Node` stores a value and has up to two child
//! `Node`s, a left one and a right one. Both trees in this crate place a new value by walking
//! down from the root: strictly smaller values go left, everything else goes right.
//!
//! - [`binary_tree`] only offers insertion and traversal. It shows the shape a sequence of
//!   values produces.
//! - [`search_tree`] adds search and delete, which rely on the invariant that insertion rule
//!   maintains:
//!
//!   1. For every `Node`, all the `Node`s in its left subtree have a value less than its own.
//!   2. For every `Node`, all the `Node`s in its right subtree have a value greater than or
//!      equal to its own.
//!
//! Searching then takes `O(height)`. Nothing here rebalances, so inserting sorted values gives a
//! tree whose height is the number of values. Visiting the left subtree, then the node, then the
//! right subtree (an inorder traversal) yields the values in sorted order.
//!
//! ## Heaps
//!
//! [`heap`] builds min-heaps and max-heaps in place from an array using bottom-up heapify.
//!
//! ## The dictionary
//!
//! [`topic`] names the topics and [`session`] drives the interactive loop over any reader and
//! writer.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_tree;
pub mod heap;
pub mod node;
pub mod search_tree;
pub mod session;
pub mod topic;
