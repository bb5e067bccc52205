//! The fixed-capacity sorted buffer underlying both containers.

use std::cmp::Ordering;

use crate::compare::Compare;

/// One contiguous run of values, strictly ascending under the container's
/// ordering comparator.
///
/// The backing buffer is allocated once at the container's block capacity and
/// never grows; a full block is split instead. A block held by a directory is
/// never empty, so `min`/`max` index unconditionally.
#[derive(Debug)]
pub(crate) struct Block<T> {
    items: Vec<T>,
}

impl<T> Block<T> {
    /// A fresh block holding a single value.
    pub(crate) fn seeded(capacity: usize, value: T) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.push(value);
        Block { items }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub(crate) fn min(&self) -> &T {
        &self.items[0]
    }

    pub(crate) fn max(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Binary search under `cmp`; `Err` carries the insertion position.
    pub(crate) fn search<C: Compare<T>>(&self, cmp: &C, value: &T) -> Result<usize, usize> {
        self.items.binary_search_by(|stored| cmp.cmp(stored, value))
    }

    /// Inserts at `index`, shifting the tail right. The caller has checked
    /// that the block is not at capacity.
    pub(crate) fn insert_at(&mut self, index: usize, value: T) {
        self.items.insert(index, value);
    }

    /// Removes the element at `index`, shifting the tail left.
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Moves the upper half `[len/2, len)` into a fresh block of the same
    /// capacity. Requires at least two elements; afterwards both halves are
    /// non-empty and `self.max() < upper.min()`.
    pub(crate) fn split(&mut self, capacity: usize) -> Block<T> {
        debug_assert!(self.items.len() >= 2);
        let mid = self.items.len() / 2;
        let mut upper = Vec::with_capacity(capacity);
        upper.extend(self.items.drain(mid..));
        Block { items: upper }
    }

    /// Covering comparison for the directory's exact-location search.
    ///
    /// `Less` when every element precedes `value`, `Greater` when every
    /// element follows it, `Equal` when `value` lies within `[min, max]` —
    /// so a directory binary search lands directly on the covering block.
    pub(crate) fn span_cmp<C: Compare<T>>(&self, cmp: &C, value: &T) -> Ordering {
        if cmp.cmp(self.max(), value) == Ordering::Less {
            Ordering::Less
        } else if cmp.cmp(self.min(), value) == Ordering::Greater {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// True when the whole block sorts strictly before `value`. Scans use
    /// this as the partition predicate locating the first block that can
    /// still hold a match.
    pub(crate) fn precedes<C: Compare<T>>(&self, cmp: &C, value: &T) -> bool {
        cmp.cmp(self.max(), value) == Ordering::Less
    }
}
