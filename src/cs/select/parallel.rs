//! Data-parallel top-k / bottom-k over slices.
//!
//! The slice is cut into chunks, each chunk is reduced to a [`BoundedHeap`] of `n` slots on the
//! rayon pool, and the partial results are merged pairwise through another bounded heap.
use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;

use super::bounded_heap::{BoundedHeap, Retain};

/// Chunks smaller than this are not worth a task of their own.
const MIN_CHUNK_LEN: usize = 1024;

/// Parallel counterpart of [`top_by_key`](super::top_k::top_by_key) for slices.
///
/// Returns references to the `n` elements with the largest key. The kept key multiset is the
/// same as the sequential selector's; which of several tied elements is kept may differ.
///
/// # Example
/// ```
/// use seqalgos::cs::select::parallel::par_top_by_key;
///
/// let values: Vec<u32> = (0..10_000).collect();
/// let mut best: Vec<u32> = par_top_by_key(&values, 3, |&x| x).into_iter().copied().collect();
/// best.sort();
/// assert_eq!(best, vec![9_997, 9_998, 9_999]);
/// ```
pub fn par_top_by_key<T, K, F>(items: &[T], n: usize, key_of: F) -> Vec<&T>
where
    T: Sync,
    K: Ord,
    F: Fn(&T) -> K + Sync,
{
    par_select(items, n, Retain::Largest, &key_of)
}

/// Parallel counterpart of [`bottom_by_key`](super::top_k::bottom_by_key) for slices.
pub fn par_bottom_by_key<T, K, F>(items: &[T], n: usize, key_of: F) -> Vec<&T>
where
    T: Sync,
    K: Ord,
    F: Fn(&T) -> K + Sync,
{
    par_select(items, n, Retain::Smallest, &key_of)
}

fn par_select<'a, T, K, F>(items: &'a [T], n: usize, retain: Retain, key_of: &F) -> Vec<&'a T>
where
    T: Sync,
    K: Ord,
    F: Fn(&T) -> K + Sync,
{
    if n == 0 || items.is_empty() {
        return Vec::new();
    }

    let chunk_len = (items.len() / rayon::current_num_threads()).max(MIN_CHUNK_LEN);
    let compare = |a: &&'a T, b: &&'a T| -> Ordering { key_of(*a).cmp(&key_of(*b)) };
    debug!(
        "par_select {retain:?}: {} elements in chunks of {}, n = {}",
        items.len(),
        chunk_len,
        n
    );

    items
        .par_chunks(chunk_len)
        .map(|chunk| {
            let mut heap = BoundedHeap::new(n, retain, compare);
            heap.extend(chunk);
            heap.into_vec()
        })
        .reduce(Vec::new, |left, right| {
            let mut heap = BoundedHeap::new(n, retain, compare);
            heap.extend(left);
            heap.extend(right);
            heap.into_vec()
        })
}
