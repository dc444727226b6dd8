//! Backtracking enumeration of permutations and combinations.
//!
//! Both generators share one recursive search: a buffer of `r` slots filled one depth at a time,
//! plus a bit per input position marking what the buffer currently holds. Every completed
//! buffer is cloned into an output vector pre-sized from [`permutation_count`] or
//! [`combination_count`].
//!
//! # Examples
//! ```
//! use seqalgos::cs::combinatorial::backtracking::{combinations_of, permutations};
//!
//! let data = vec![1, 2, 3];
//! let perms = permutations(&data).unwrap();
//! assert_eq!(perms.len(), 6);
//!
//! let combos = combinations_of(&data, 2).unwrap();
//! assert_eq!(combos, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
//! ```
use bitvec::prelude::*;
use log::debug;

use super::counting::{combination_count, permutation_count};
use crate::error::Result;

/// Returns every ordering of all of `items`.
///
/// # Example
/// ```
/// use seqalgos::cs::combinatorial::backtracking::permutations;
///
/// let items = vec!['a', 'b', 'c'];
/// let perms = permutations(&items).unwrap();
/// assert_eq!(perms, vec![
///     vec!['a', 'b', 'c'],
///     vec!['a', 'c', 'b'],
///     vec!['b', 'a', 'c'],
///     vec!['b', 'c', 'a'],
///     vec!['c', 'a', 'b'],
///     vec!['c', 'b', 'a'],
/// ]);
/// ```
pub fn permutations<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    permutations_of(items, items.len())
}

/// Returns every ordered arrangement of `r` distinct positions of `items`.
///
/// Results come out in lexicographic order of the chosen positions.
///
/// # Errors
/// * `Error::OutOfRange` if `r > items.len()`
/// * `Error::CountOverflow` if `items.len()! / (items.len() - r)!` does not fit in `usize`
pub fn permutations_of<T: Clone>(items: &[T], r: usize) -> Result<Vec<Vec<T>>> {
    let expected = permutation_count(items.len(), r)?;
    Ok(Backtracker::new(items, r, Arrangement::Ordered, expected).run())
}

/// Returns the single combination that uses all of `items`, in input order.
pub fn combinations<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    combinations_of(items, items.len())
}

/// Returns every `r`-element subset of `items`, each in original relative order.
///
/// # Example
/// ```
/// use seqalgos::cs::combinatorial::backtracking::combinations_of;
///
/// let items = vec![1, 2, 3, 4];
/// let combos = combinations_of(&items, 2).unwrap();
/// assert_eq!(combos, vec![
///     vec![1, 2],
///     vec![1, 3],
///     vec![1, 4],
///     vec![2, 3],
///     vec![2, 4],
///     vec![3, 4],
/// ]);
/// ```
pub fn combinations_of<T: Clone>(items: &[T], r: usize) -> Result<Vec<Vec<T>>> {
    let expected = combination_count(items.len(), r)?;
    Ok(Backtracker::new(items, r, Arrangement::Unordered, expected).run())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrangement {
    /// Any unused position may fill the next slot.
    Ordered,
    /// Only positions after the previous pick may fill the next slot.
    Unordered,
}

struct Backtracker<'a, T> {
    items: &'a [T],
    size: usize,
    arrangement: Arrangement,
    buffer: Vec<T>,
    used: BitVec,
    results: Vec<Vec<T>>,
    expected: usize,
}

impl<'a, T: Clone> Backtracker<'a, T> {
    fn new(items: &'a [T], size: usize, arrangement: Arrangement, expected: usize) -> Self {
        debug!(
            "backtracking {arrangement:?}: n = {}, r = {}, expecting {} results",
            items.len(),
            size,
            expected
        );
        Backtracker {
            items,
            size,
            arrangement,
            buffer: Vec::with_capacity(size),
            used: bitvec![0; items.len()],
            results: Vec::with_capacity(expected),
            expected,
        }
    }

    fn run(mut self) -> Vec<Vec<T>> {
        self.descend(0);
        debug_assert_eq!(self.results.len(), self.expected);
        debug_assert!(self.buffer.is_empty() && self.used.not_any());
        self.results
    }

    /// Fills slot `self.buffer.len()` from positions `from..`, then undoes the choice.
    fn descend(&mut self, from: usize) {
        debug_assert_eq!(self.used.count_ones(), self.buffer.len());
        let depth = self.buffer.len();
        if depth == self.size {
            self.results.push(self.buffer.clone());
            return;
        }

        for i in from..self.items.len() {
            if self.used[i] {
                continue;
            }
            if self.arrangement == Arrangement::Unordered
                && self.items.len() - i < self.size - depth
            {
                break;
            }

            self.used.set(i, true);
            self.buffer.push(self.items[i].clone());
            let next = match self.arrangement {
                Arrangement::Ordered => 0,
                Arrangement::Unordered => i + 1,
            };
            self.descend(next);
            self.buffer.pop();
            self.used.set(i, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashSet;

    #[test]
    fn test_permutations_empty() {
        let items: Vec<i32> = vec![];
        assert_eq!(permutations(&items).unwrap(), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_permutations_single() {
        assert_eq!(permutations(&[1]).unwrap(), vec![vec![1]]);
    }

    #[test]
    fn test_permutations_two() {
        assert_eq!(permutations(&[1, 2]).unwrap(), vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn test_permutations_of_size_two() {
        let perms = permutations_of(&['a', 'b', 'c'], 2).unwrap();
        assert_eq!(
            perms,
            vec![
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['b', 'a'],
                vec!['b', 'c'],
                vec!['c', 'a'],
                vec!['c', 'b'],
            ]
        );
    }

    #[test]
    fn test_permutations_are_distinct_and_counted() {
        let items: Vec<u8> = (0..6).collect();
        for r in 0..=items.len() {
            let perms = permutations_of(&items, r).unwrap();
            assert_eq!(perms.len(), permutation_count(items.len(), r).unwrap());
            let unique: HashSet<_> = perms.iter().collect();
            assert_eq!(unique.len(), perms.len());
            for p in &perms {
                assert_eq!(p.len(), r);
                let members: HashSet<_> = p.iter().collect();
                assert_eq!(members.len(), r);
            }
        }
    }

    #[test]
    fn test_size_zero_yields_one_empty_arrangement() {
        let items = vec![1, 2, 3];
        assert_eq!(permutations_of(&items, 0).unwrap(), vec![Vec::<i32>::new()]);
        assert_eq!(combinations_of(&items, 0).unwrap(), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_combinations_k_one() {
        assert_eq!(
            combinations_of(&[1, 2, 3], 1).unwrap(),
            vec![vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn test_combinations_k_two() {
        assert_eq!(
            combinations_of(&[1, 2, 3], 2).unwrap(),
            vec![vec![1, 2], vec![1, 3], vec![2, 3]]
        );
    }

    #[test]
    fn test_combinations_full_length_is_the_input() {
        let items = vec!["x", "y", "z"];
        assert_eq!(combinations(&items).unwrap(), vec![items.clone()]);
        assert_eq!(combinations(&Vec::<i32>::new()).unwrap(), vec![vec![]]);
    }

    #[test]
    fn test_combinations_preserve_order_and_are_unique_sets() {
        let items: Vec<u32> = (0..9).collect();
        for r in 0..=items.len() {
            let combos = combinations_of(&items, r).unwrap();
            assert_eq!(combos.len(), combination_count(items.len(), r).unwrap());
            let sets: HashSet<Vec<u32>> = combos.iter().cloned().collect();
            assert_eq!(sets.len(), combos.len());
            for c in &combos {
                assert!(c.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_duplicate_values_are_distinct_positions() {
        let perms = permutations(&[7, 7]).unwrap();
        assert_eq!(perms, vec![vec![7, 7], vec![7, 7]]);
        let combos = combinations_of(&[7, 7, 7], 2).unwrap();
        assert_eq!(combos.len(), 3);
    }

    #[test]
    fn test_r_too_large() {
        let items = vec![1, 2, 3];
        assert_eq!(
            combinations_of(&items, 4),
            Err(Error::out_of_range("r", 4, 3))
        );
        assert_eq!(
            permutations_of(&items, 4),
            Err(Error::out_of_range("r", 4, 3))
        );
    }

    #[test]
    fn test_unrepresentable_count_fails_before_enumeration() {
        let items: Vec<u8> = (0..25).collect();
        assert_eq!(
            permutations(&items),
            Err(Error::count_overflow(25, 25))
        );
    }

    #[test]
    fn test_output_is_presized_exactly() {
        let perms = permutations_of(&[1, 2, 3, 4], 3).unwrap();
        assert_eq!(perms.len(), 24);
        assert_eq!(perms.capacity(), 24);
        let combos = combinations_of(&[1, 2, 3, 4, 5], 3).unwrap();
        assert_eq!(combos.capacity(), 10);
    }

    #[test]
    fn test_results_are_independent_copies() {
        let mut perms = permutations(&[1, 2, 3]).unwrap();
        perms[0][0] = 99;
        perms[0].push(100);
        assert_eq!(perms[1], vec![1, 3, 2]);
        assert!(perms[1..].iter().all(|p| p.len() == 3 && !p.contains(&99)));

        let mut combos = combinations_of(&[String::from("a"), String::from("b")], 1).unwrap();
        combos[0][0].push('!');
        assert_eq!(combos[1], vec![String::from("b")]);
    }
}
