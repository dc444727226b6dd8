pub mod backtracking;
pub mod counting;

pub use backtracking::{combinations, combinations_of, permutations, permutations_of};
pub use counting::{combination_count, permutation_count};
