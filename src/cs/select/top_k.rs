//! Top-k and bottom-k selection in a single pass over the input.
//!
//! Each selector keeps a [`BoundedHeap`] of `n` slots, so a call costs O(|source| · log n) time
//! and O(n) auxiliary space. The returned elements are in unspecified order.
//!
//! # Examples
//! ```
//! use seqalgos::cs::select::top_k::{bottom, top};
//!
//! let mut largest = top(vec![3, 1, 4, 1, 5, 9, 2, 6], 3);
//! largest.sort();
//! assert_eq!(largest, vec![5, 6, 9]);
//!
//! let mut smallest = bottom(vec![3, 1, 4, 1, 5, 9, 2, 6], 2);
//! smallest.sort();
//! assert_eq!(smallest, vec![1, 1]);
//! ```
use std::cmp::Ordering;

use log::{debug, trace};

use super::bounded_heap::{BoundedHeap, Retain};

/// Returns the `n` largest elements of `source` under `compare`.
///
/// Ties at the boundary are resolved in favour of the element seen first.
///
/// # Example
/// ```
/// use seqalgos::cs::select::top_k::top_by;
///
/// let words = vec!["pear", "fig", "banana", "kiwi"];
/// let mut longest = top_by(words, 2, |a, b| a.len().cmp(&b.len()));
/// longest.sort();
/// assert_eq!(longest, vec!["banana", "pear"]);
/// ```
pub fn top_by<I, F>(source: I, n: usize, compare: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    select(source, n, Retain::Largest, compare)
}

/// Returns the `n` smallest elements of `source` under `compare`.
pub fn bottom_by<I, F>(source: I, n: usize, compare: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    select(source, n, Retain::Smallest, compare)
}

/// Returns the `n` elements of `source` with the largest key.
///
/// `key_of` is evaluated on both sides of every comparison, so it should be cheap.
///
/// # Example
/// ```
/// use seqalgos::cs::select::top_k::top_by_key;
///
/// let scores = vec![("ann", 72), ("bob", 91), ("cy", 64), ("dee", 88)];
/// let mut best = top_by_key(scores, 2, |&(_, score)| score);
/// best.sort();
/// assert_eq!(best, vec![("bob", 91), ("dee", 88)]);
/// ```
pub fn top_by_key<I, K, F>(source: I, n: usize, mut key_of: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    top_by(source, n, |a, b| key_of(a).cmp(&key_of(b)))
}

/// Returns the `n` elements of `source` with the smallest key.
pub fn bottom_by_key<I, K, F>(source: I, n: usize, mut key_of: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    bottom_by(source, n, |a, b| key_of(a).cmp(&key_of(b)))
}

/// Returns the `n` largest elements of a self-ordered `source`.
pub fn top<I>(source: I, n: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    top_by(source, n, Ord::cmp)
}

/// Returns the `n` smallest elements of a self-ordered `source`.
pub fn bottom<I>(source: I, n: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    bottom_by(source, n, Ord::cmp)
}

/// Like [`top_by_key`], but `None` elements are skipped and never compete for a slot.
///
/// # Example
/// ```
/// use seqalgos::cs::select::top_k::top_present_by_key;
///
/// let readings = vec![Some(4), None, Some(9), None, Some(1)];
/// let mut best = top_present_by_key(readings, 5, |&x| x);
/// best.sort();
/// assert_eq!(best, vec![1, 4, 9]);
/// ```
pub fn top_present_by_key<I, T, K, F>(source: I, n: usize, key_of: F) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    top_by_key(source.into_iter().flatten(), n, key_of)
}

/// Like [`bottom_by_key`], but `None` elements are skipped and never compete for a slot.
pub fn bottom_present_by_key<I, T, K, F>(source: I, n: usize, key_of: F) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    bottom_by_key(source.into_iter().flatten(), n, key_of)
}

fn select<I, F>(source: I, n: usize, retain: Retain, compare: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    if n == 0 {
        trace!("select {retain:?}: n = 0, source not inspected");
        return Vec::new();
    }

    let mut heap = BoundedHeap::new(n, retain, compare);
    let mut seen = 0usize;
    for item in source {
        seen += 1;
        heap.push(item);
    }
    debug!(
        "select {retain:?}: kept {} of {} elements (n = {})",
        heap.len(),
        seen,
        n
    );
    heap.into_vec()
}
