//! Index arithmetic for binary trees stored in a flat array.
//!
//! A [`Layout`] decides where the root lives and how to get from a slot to its children and
//! parent. The tree itself only ever moves between slots through these functions, so a different
//! shape can be plugged in without touching insertion, search, or deletion.
//!
//! ```text
//! OneBased                ZeroBased
//!
//!         1                       0
//!       /   \                   /   \
//!      2     3                 1     2
//!     / \   / \               / \   / \
//!    4   5 6   7             3   4 5   6
//! ```
//!
//! Child indices saturate instead of overflowing. A saturated index is always past the end of any
//! real array so callers treat it like any other out of bounds slot.

/// The indexed-binary-tree capability: navigation between slots of a tree array.
pub trait Layout {
    /// The slot holding the root of the tree.
    fn root() -> usize;

    /// The slot holding the left child of the node at `index`.
    fn left(index: usize) -> usize;

    /// The slot holding the right child of the node at `index`.
    fn right(index: usize) -> usize;

    /// The slot holding the parent of the node at `index`, or `None` for the root.
    fn parent(index: usize) -> Option<usize>;
}

/// The classic one-based layout. The root is at `1`, children of `i` are at `2i` and `2i + 1`,
/// and slot `0` is never used.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OneBased;

impl Layout for OneBased {
    fn root() -> usize {
        1
    }

    fn left(index: usize) -> usize {
        index.saturating_mul(2)
    }

    fn right(index: usize) -> usize {
        index.saturating_mul(2).saturating_add(1)
    }

    fn parent(index: usize) -> Option<usize> {
        if index > Self::root() {
            Some(index / 2)
        } else {
            None
        }
    }
}

/// A zero-based layout with no wasted slot. The root is at `0` and children of `i` are at
/// `2i + 1` and `2i + 2`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ZeroBased;

impl Layout for ZeroBased {
    fn root() -> usize {
        0
    }

    fn left(index: usize) -> usize {
        index.saturating_mul(2).saturating_add(1)
    }

    fn right(index: usize) -> usize {
        index.saturating_mul(2).saturating_add(2)
    }

    fn parent(index: usize) -> Option<usize> {
        index.checked_sub(1).map(|i| i / 2)
    }
}
