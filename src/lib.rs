//! Generic algorithms over finite, in-memory sequences: bounded top-k / bottom-k selection,
//! permutation and combination enumeration, and stepped slicing with negative indices.
//!
//! ```
//! use seqalgos::{combinations_of, slice, top};
//!
//! let mut best = top(vec![3, 1, 4, 1, 5, 9, 2, 6], 3);
//! best.sort();
//! assert_eq!(best, vec![5, 6, 9]);
//!
//! assert_eq!(combinations_of(&[1, 2, 3], 2)?, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
//!
//! let reversed: Vec<_> = slice(&[1, 2, 3], None, None, -1).copied().collect();
//! assert_eq!(reversed, vec![3, 2, 1]);
//! # Ok::<(), seqalgos::Error>(())
//! ```
pub mod cs;
pub mod error;

pub use cs::{combinatorial, select, sequence};
pub use cs::{
    bottom, bottom_by, bottom_by_key, combinations, combinations_of, permutations,
    permutations_of, slice, top, top_by, top_by_key,
};
pub use error::{Error, Result};
