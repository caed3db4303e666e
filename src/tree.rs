//! A BST stored in a fixed size array. Nodes don't point at their children: a node's children
//! live at slots computed from its own slot by a [`Layout`].
//!
//! # Examples
//!
//! ```
//! use array_bst::ArrayBst;
//!
//! let mut tree: ArrayBst<i32> = ArrayBst::new(10);
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&5));
//!
//! assert_eq!(tree.insert(5), Ok(true));
//! assert!(tree.contains(&5));
//!
//! // Values double as keys so inserting one twice is rejected.
//! assert_eq!(tree.insert(5), Ok(false));
//!
//! // Absent values are rejected outright.
//! assert!(tree.insert(None::<i32>).is_err());
//!
//! assert_eq!(tree.delete(&5), Ok(true));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::error::{Error, Operation, Result};
use crate::iter::Iter;
use crate::layout::{Layout, OneBased};

/// A Binary Search Tree kept in a flat array of slots. The slot a value lands in encodes its
/// position in the tree. Once built the array never grows: an insert that needs a slot past the
/// end is rejected. Only [`ArrayBst::from_values`] sizes the array to fit its input.
///
/// The tree doesn't balance itself. Inserting sorted values walks down one edge of the tree and
/// uses up slots exponentially fast.
pub struct ArrayBst<T, L = OneBased> {
    slots: Vec<Option<T>>,
    len: usize,
    layout: PhantomData<L>,
}

impl<T> ArrayBst<T> {
    /// Generates a new, empty tree with `capacity` slots using the [`OneBased`] layout. Slot `0`
    /// is never used so this can hold at most `capacity - 1` values.
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<T, L> ArrayBst<T, L>
where
    L: Layout,
{
    /// Generates a new, empty tree with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            len: 0,
            layout: PhantomData,
        }
    }

    /// Builds a tree by inserting every value in order. The tree array is sized to fit the
    /// sequence: it has at least one slot per value, and more if the values' paths reach deeper
    /// than that. Duplicates are skipped.
    ///
    /// Sorted input builds a chain, so `n` sorted values need around `2^n` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::ArrayBst;
    ///
    /// let tree: ArrayBst<_> = ArrayBst::from_values([2, 1, 3]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.capacity(), 4);
    /// assert_eq!(tree.to_string(), "[null, 2, 1, 3]");
    ///
    /// // 10 lands in slot 7 so the array grows to fit it.
    /// let tree: ArrayBst<_> = ArrayBst::from_values([5, 4, 5, 7, 10]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.capacity(), 8);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let mut tree = Self::with_capacity(values.len().saturating_add(L::root()));
        let mut skipped = 0;
        for value in values {
            if !tree.insert_growing(value) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!("Skipped {} values while building a tree.", skipped);
        }

        tree
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of slots in the tree array, including any the layout never uses.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The raw tree array. Slot `i` is `None` when no value lives there.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Inserts a value into the tree. Returns `Ok(true)` if the value was stored and `Ok(false)`
    /// if it wasn't, either because it's already in the tree or because there's no slot for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::ArrayBst;
    ///
    /// let mut tree: ArrayBst<i32> = ArrayBst::new(4);
    ///
    /// assert_eq!(tree.insert(2), Ok(true));
    /// assert_eq!(tree.insert(Some(1)), Ok(true));
    /// assert_eq!(tree.insert(3), Ok(true));
    ///
    /// // All three usable slots are taken.
    /// assert_eq!(tree.insert(4), Ok(false));
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn insert(&mut self, value: impl Into<Option<T>>) -> Result<bool>
    where
        T: Ord,
    {
        let value = value.into().ok_or(Error::InvalidArgument {
            operation: Operation::Insert,
        })?;

        Ok(self.insert_value(value))
    }

    /// Whether `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::ArrayBst;
    ///
    /// let tree: ArrayBst<_> = ArrayBst::from_values([5, 4, 7]);
    ///
    /// assert!(tree.contains(&7));
    /// assert!(!tree.contains(&22));
    /// ```
    #[doc(alias = "search")]
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find_index(value).is_some()
    }

    /// Deletes `value` from the tree. Returns `Ok(true)` if it was found and removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::ArrayBst;
    ///
    /// let mut tree: ArrayBst<_> = ArrayBst::from_values([5, 4, 7]);
    ///
    /// assert_eq!(tree.delete(&5), Ok(true));
    /// assert_eq!(tree.delete(&5), Ok(false));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&4, &7]);
    /// ```
    pub fn delete<'a>(&mut self, value: impl Into<Option<&'a T>>) -> Result<bool>
    where
        T: Ord + 'a,
    {
        let value = value.into().ok_or(Error::InvalidArgument {
            operation: Operation::Delete,
        })?;

        match self.find_index(value) {
            Some(index) => {
                self.remove_at(index);
                Ok(true)
            }
            None => {
                debug!("Nothing to delete: value not in tree.");
                Ok(false)
            }
        }
    }

    /// Visits the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::ArrayBst;
    ///
    /// let tree: ArrayBst<_> = ArrayBst::from_values([5, 4, 5, 7]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [4, 5, 7]);
    /// ```
    #[doc(alias = "inorder")]
    pub fn iter(&self) -> Iter<'_, T, L> {
        Iter::new(&self.slots, self.len)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.get(self.leftmost(L::root()))
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut index = L::root();
        while self.is_occupied(L::right(index)) {
            index = L::right(index);
        }

        self.get(index)
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(L::root(), 1)];
        while let Some((index, depth)) = pending.pop() {
            if self.is_occupied(index) {
                height = height.max(depth);
                pending.push((L::left(index), depth + 1));
                pending.push((L::right(index), depth + 1));
            }
        }

        height
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    fn is_full(&self) -> bool {
        self.len >= self.capacity().saturating_sub(L::root())
    }

    /// Walks down from the root along `value`'s path. Slots past the end of the array count as
    /// vacant so the caller decides whether the array may grow.
    fn descend(&self, value: &T) -> Descent
    where
        T: Ord,
    {
        let mut index = L::root();
        while let Some(current) = self.get(index) {
            match value.cmp(current) {
                Ordering::Less => index = L::left(index),
                Ordering::Equal => return Descent::Found(index),
                Ordering::Greater => index = L::right(index),
            }
        }

        Descent::Vacant(index)
    }

    /// Drops `value` into the first empty slot on its path, if that slot is inside the array.
    fn insert_value(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        if self.is_full() {
            debug!("Rejecting insert: all {} usable slots are taken.", self.len);
            return false;
        }

        match self.descend(&value) {
            Descent::Found(index) => {
                debug!("Rejecting insert: duplicate found in slot {}.", index);
                false
            }
            Descent::Vacant(index) if index >= self.capacity() => {
                debug!(
                    "Rejecting insert: slot {} is past the end of the tree array.",
                    index
                );
                false
            }
            Descent::Vacant(index) => {
                self.fill(index, value);
                true
            }
        }
    }

    /// Like [`Self::insert_value`] but grows the array when the vacant slot is past its end.
    fn insert_growing(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match self.descend(&value) {
            Descent::Found(_) => false,
            Descent::Vacant(index) => {
                // A saturated index can't be addressed by any array.
                let Some(needed) = index.checked_add(1) else {
                    debug!("Rejecting insert: path runs past the largest addressable slot.");
                    return false;
                };
                if needed > self.slots.len() {
                    trace!("Growing tree array to {} slots.", needed);
                    self.slots.resize_with(needed, || None);
                }
                self.fill(index, value);
                true
            }
        }
    }

    fn fill(&mut self, index: usize, value: T)
    where
        T: Ord,
    {
        self.slots[index] = Some(value);
        self.len += 1;
        self.check_slot(index);
    }

    fn find_index(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        match self.descend(value) {
            Descent::Found(index) => Some(index),
            Descent::Vacant(_) => None,
        }
    }

    /// The slot of the smallest value in the subtree rooted at `index`.
    fn leftmost(&self, mut index: usize) -> usize {
        while self.is_occupied(L::left(index)) {
            index = L::left(index);
        }

        index
    }

    /// Removes the value in the occupied slot `index`, filling the gap so that the remaining
    /// values stay connected to the root.
    fn remove_at(&mut self, index: usize)
    where
        T: Ord,
    {
        let left = L::left(index);
        let right = L::right(index);
        match (self.is_occupied(left), self.is_occupied(right)) {
            (false, false) => self.slots[index] = None,
            (true, false) => self.lift(left, index),
            (false, true) => self.lift(right, index),

            // With two children the successor (the smallest value in the right subtree) takes
            // this slot. It has no left child so at most its right subtree has to move up.
            (true, true) => {
                let successor = self.leftmost(right);
                self.slots[index] = self.slots[successor].take();
                if self.is_occupied(L::right(successor)) {
                    self.lift(L::right(successor), successor);
                }
                self.check_slot(successor);
            }
        }
        self.len -= 1;
        self.check_slot(index);
    }

    /// Moves the whole subtree rooted at `from` so that it's rooted at `to`, overwriting whatever
    /// is in `to`. Every descendant keeps its position relative to the subtree root.
    ///
    /// `to` must be the parent of `from` and `from` must be its only child. Moving level by level
    /// means each level is written into slots that the level above has just vacated.
    fn lift(&mut self, from: usize, to: usize) {
        trace!("Lifting subtree in slot {} into slot {}.", from, to);
        let mut pending = VecDeque::from([(from, to)]);
        while let Some((from, to)) = pending.pop_front() {
            let moved = self.slots.get_mut(from).and_then(Option::take);
            let occupied = moved.is_some();
            // `to` comes before `from` in the array so when `to` is out of bounds so is `from`.
            if let Some(slot) = self.slots.get_mut(to) {
                *slot = moved;
            }
            if occupied {
                pending.push_back((L::left(from), L::left(to)));
                pending.push_back((L::right(from), L::right(to)));
            }
        }
    }

    /// In debug builds, asserts that the value in `index` (if any) is attached to the tree and
    /// ordered against its children.
    fn check_slot(&self, index: usize)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            let Some(value) = self.get(index) else {
                return;
            };
            if let Some(parent) = L::parent(index) {
                assert!(self.is_occupied(parent), "slot {} is orphaned", index);
            }
            if let Some(left) = self.get(L::left(index)) {
                assert!(left < value);
            }
            if let Some(right) = self.get(L::right(index)) {
                assert!(value < right);
            }
        }
    }
}

/// Where a walk down the tree for some value ends.
enum Descent {
    /// The value is already in this slot.
    Found(usize),
    /// This slot is empty (or past the end of the array) and is where the value belongs.
    Vacant(usize),
}

/// Manual implementation of `Clone` so the layout marker doesn't need to be `Clone`.
impl<T, L> Clone for ArrayBst<T, L>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
            layout: PhantomData,
        }
    }
}

impl<T, L> fmt::Debug for ArrayBst<T, L>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBst")
            .field("len", &self.len)
            .field("capacity", &self.slots.len())
            .field("slots", &self.slots)
            .finish()
    }
}

/// Renders the raw tree array in slot order with `null` marking empty slots, e.g.
/// `[null, 5, 4, 7, null, null, null, 10]`.
impl<T, L> fmt::Display for ArrayBst<T, L>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(value) => write!(f, "{}", value)?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("]")
    }
}

impl<'a, T, L> IntoIterator for &'a ArrayBst<T, L>
where
    L: Layout,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
