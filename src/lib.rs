//! A Binary Search Tree stored in a flat array, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`, where each node owns its children.
//! The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some nodes have no children. These nodes are called "leaf nodes".
//!
//! ## Array Layout
//!
//! This crate doesn't allocate nodes at all. The tree lives in a single array of slots and a
//! node's position in the array says where it is in the tree: with the root in slot `1`, the
//! children of slot `i` are in slots `2i` and `2i + 1` and its parent is in slot `i / 2`. The tree
//! is stored as
//!
//! ```text
//!     A
//!      \
//!       C          [null, A, null, C, null, null, B, D]
//!      / \
//!     B   D
//! ```
//!
//! Empty slots are `None`. Values must always be connected to the root through occupied slots so
//! deleting a node with a single child moves that child's whole subtree up a level rather than
//! leaving grandchildren stranded below an empty slot.
//!
//! The arithmetic is pluggable through [`Layout`]. [`OneBased`] is the layout above and
//! [`ZeroBased`] packs the root into slot `0`.
//!
//! The tree never grows. Searching, inserting, and deleting take `O(height)` steps, but an
//! unbalanced tree of height `h` needs around `2^h` slots, so an insert that would land past the
//! end of the array is rejected.

#![deny(missing_docs)]

pub mod error;
pub mod iter;
pub mod layout;
pub mod tree;

pub use error::{Error, Operation, Result};
pub use iter::Iter;
pub use layout::{Layout, OneBased, ZeroBased};
pub use tree::ArrayBst;
