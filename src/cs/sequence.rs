//! Slicing and small utilities over finite sequences.
//!
//! [`strided`] implements negative-index, stepped slicing. The remaining modules are the
//! one-pass helpers built on standard slice operations: chunking, round-robin splitting,
//! monotonicity checks, exact-count assertions and lazy shuffling.

pub mod exact;
pub mod order;
pub mod partition;
pub mod shuffle;
pub mod strided;

pub use exact::{
    double, double_by, double_or_empty, double_or_empty_by, exactly, exactly_by,
    exactly_or_empty, exactly_or_empty_by,
};
pub use order::is_sorted;
pub use partition::{chunk, split};
pub use shuffle::{shuffle, shuffle_thread_rng, Shuffle};
pub use strided::{slice, SliceBounds, StridedSlice};
