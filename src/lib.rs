//! This crate exposes two classic ordered data structures mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a key and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its own
//!    key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than its
//!    own key.
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path from the root `Node`
//! to a leaf `Node`). The [`tree::OrderedTree`] here is not balanced, so inserting keys in sorted
//! order degrades it to a list. BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! ## Binary Heap
//!
//! A binary max-heap is a complete binary tree in which every node is at least as large as its
//! children, so the largest value is always at the root. Because the tree is complete it can be
//! laid out level by level in an array and navigated with index arithmetic alone. The
//! [`heap::BinaryMaxHeap`] here supports inserting, extracting the maximum, removing or
//! reprioritizing an arbitrary slot, and heap sort, each in `O(lg N)` per element.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod heap;
pub mod tree;
mod util;

pub use error::HeapError;
pub use heap::{BinaryMaxHeap, Priority};
pub use tree::OrderedTree;
