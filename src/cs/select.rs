//! Bounded selection: the k largest or k smallest elements of a sequence.
//!
//! All selectors run in one pass over the input with a fixed-size heap of `k` slots.
//! The parallel variants trade the single pass for a chunked reduction over a slice.

pub mod bounded_heap;
pub mod parallel;
pub mod top_k;

pub use bounded_heap::{BoundedHeap, Retain, Slot};
pub use parallel::{par_bottom_by_key, par_top_by_key};
pub use top_k::{
    bottom, bottom_by, bottom_by_key, bottom_present_by_key, top, top_by, top_by_key,
    top_present_by_key,
};
