//! In-order traversal over the values of a tree.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::layout::{Layout, OneBased};

/// An in-order traversal of an [`ArrayBst`][crate::ArrayBst], yielding values in ascending
/// order. Created by [`ArrayBst::iter`][crate::ArrayBst::iter].
///
/// The traversal keeps its own stack of slots instead of recursing so a degenerate tree can't
/// overflow the call stack.
pub struct Iter<'a, T, L = OneBased> {
    slots: &'a [Option<T>],
    /// Slots whose left subtree is being visited. Each is yielded once that subtree is done.
    stack: Vec<usize>,
    /// The next subtree to descend into.
    cursor: usize,
    remaining: usize,
    layout: PhantomData<L>,
}

impl<'a, T, L> Iter<'a, T, L>
where
    L: Layout,
{
    pub(crate) fn new(slots: &'a [Option<T>], len: usize) -> Self {
        Self {
            slots,
            stack: Vec::new(),
            cursor: L::root(),
            remaining: len,
            layout: PhantomData,
        }
    }

    fn get(&self, index: usize) -> Option<&'a T> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

impl<'a, T, L> Clone for Iter<'a, T, L> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            stack: self.stack.clone(),
            cursor: self.cursor,
            remaining: self.remaining,
            layout: PhantomData,
        }
    }
}

impl<'a, T, L> Iterator for Iter<'a, T, L>
where
    L: Layout,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.get(self.cursor).is_some() {
            self.stack.push(self.cursor);
            self.cursor = L::left(self.cursor);
        }

        let index = self.stack.pop()?;
        self.cursor = L::right(index);
        self.remaining = self.remaining.saturating_sub(1);
        self.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, L> ExactSizeIterator for Iter<'a, T, L> where L: Layout {}

impl<'a, T, L> FusedIterator for Iter<'a, T, L> where L: Layout {}
