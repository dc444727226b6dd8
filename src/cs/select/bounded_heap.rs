//! Fixed-capacity heap used by the top-k / bottom-k selectors.

use std::cmp::Ordering;
use std::fmt;

/// A heap slot: either still unused or holding a kept candidate.
///
/// An empty slot loses to every occupied one and ties with other empty slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Empty,
    Occupied(T),
}

impl<T> Slot<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(item) => Some(item),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(item) => Some(item),
        }
    }
}

/// Which end of the ordering the heap retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retain {
    /// Keep the largest items (min-heap, root is the smallest kept item).
    Largest,
    /// Keep the smallest items (max-heap, root is the largest kept item).
    Smallest,
}

impl Retain {
    /// Ordering of a candidate against a kept item when the candidate is strictly better.
    fn better(self) -> Ordering {
        match self {
            Retain::Largest => Ordering::Greater,
            Retain::Smallest => Ordering::Less,
        }
    }

    fn worse(self) -> Ordering {
        self.better().reverse()
    }
}

/// A fixed-capacity binary heap that keeps the best `capacity` items seen so far.
///
/// The heap is stored implicitly in a slot array (children of `i` at `2i + 1` and `2i + 2`).
/// Every slot starts out [`Slot::Empty`] and the weakest kept candidate always sits at the root,
/// so admitting a new item is a single root replacement followed by a sift-down.
///
/// # Example
/// ```
/// use seqalgos::cs::select::{BoundedHeap, Retain};
///
/// let mut heap = BoundedHeap::new(2, Retain::Largest, |a: &i32, b: &i32| a.cmp(b));
/// heap.extend([4, 1, 7, 3]);
/// assert_eq!(heap.into_sorted_vec(), vec![7, 4]);
/// ```
pub struct BoundedHeap<T, F> {
    slots: Vec<Slot<T>>,
    len: usize,
    retain: Retain,
    compare: F,
}

impl<T, F> BoundedHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Creates a heap with `capacity` empty slots.
    pub fn new(capacity: usize, retain: Retain, compare: F) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);
        BoundedHeap {
            slots,
            len: 0,
            retain,
            compare,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    pub fn retain(&self) -> Retain {
        self.retain
    }

    /// The item a newcomer has to beat, or `None` while empty slots remain.
    ///
    /// Once the heap is full this is the weakest of the kept items.
    pub fn threshold(&self) -> Option<&T> {
        self.slots.first().and_then(Slot::as_ref)
    }

    /// Offers `item` to the heap. Returns `true` if it was kept.
    ///
    /// The item is admitted when the root slot is empty or when it is strictly better than
    /// the root under the retained ordering; ties keep the incumbent.
    pub fn push(&mut self, item: T) -> bool {
        let Some(root) = self.slots.first() else {
            return false;
        };
        let (admit, fills_empty) = match root {
            Slot::Empty => (true, true),
            Slot::Occupied(kept) => ((self.compare)(&item, kept) == self.retain.better(), false),
        };
        if !admit {
            return false;
        }
        if fills_empty {
            self.len += 1;
        }
        self.slots[0] = Slot::Occupied(item);
        self.sift_down(0);
        true
    }

    /// Kept items in heap order, empty slots dropped.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_iter().filter_map(Slot::into_option).collect()
    }

    /// Kept items ordered best first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let retain = self.retain;
        let mut compare = self.compare;
        let mut items: Vec<T> = self
            .slots
            .into_iter()
            .filter_map(Slot::into_option)
            .collect();
        items.sort_by(|a, b| match retain {
            Retain::Largest => compare(b, a),
            Retain::Smallest => compare(a, b),
        });
        items
    }

    /// True if the slot at `a` should sit closer to the root than the slot at `b`.
    fn is_worse(&mut self, a: usize, b: usize) -> bool {
        match (&self.slots[a], &self.slots[b]) {
            (Slot::Empty, Slot::Empty) => false,
            (Slot::Empty, Slot::Occupied(_)) => true,
            (Slot::Occupied(_), Slot::Empty) => false,
            (Slot::Occupied(x), Slot::Occupied(y)) => (self.compare)(x, y) == self.retain.worse(),
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * node + 1;
            let right = left + 1;
            if left >= len {
                return;
            }
            let mut child = left;
            if right < len && self.is_worse(right, left) {
                child = right;
            }
            if !self.is_worse(child, node) {
                return;
            }
            self.slots.swap(child, node);
            node = child;
        }
    }
}

impl<T, F> Extend<T> for BoundedHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for BoundedHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedHeap")
            .field("slots", &self.slots)
            .field("len", &self.len)
            .field("retain", &self.retain)
            .finish()
    }
}
