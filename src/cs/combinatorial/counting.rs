use num_integer::Integer;

use crate::error::{Error, Result};

/// Number of ordered arrangements of `r` elements drawn from `n`: `n! / (n - r)!`.
///
/// # Errors
/// * `Error::OutOfRange` if `r > n`
/// * `Error::CountOverflow` if the count does not fit in `usize`
///
/// # Example
/// ```
/// use seqalgos::cs::combinatorial::counting::permutation_count;
///
/// assert_eq!(permutation_count(5, 2).unwrap(), 20);
/// assert_eq!(permutation_count(4, 0).unwrap(), 1);
/// assert!(permutation_count(2, 3).is_err());
/// ```
pub fn permutation_count(n: usize, r: usize) -> Result<usize> {
    if r > n {
        return Err(Error::out_of_range("r", r, n));
    }
    ((n - r + 1)..=n)
        .try_fold(1usize, |count, factor| count.checked_mul(factor))
        .ok_or_else(|| Error::count_overflow(n, r))
}

/// Number of `r`-element subsets of an `n`-element set: `n! / (r! (n - r)!)`.
///
/// Uses the multiplicative form `C(n, i + 1) = C(n, i) · (n - i) / (i + 1)`, cancelling the
/// common factor first so an intermediate product only overflows when the result does.
///
/// # Example
/// ```
/// use seqalgos::cs::combinatorial::counting::combination_count;
///
/// assert_eq!(combination_count(5, 2).unwrap(), 10);
/// assert_eq!(combination_count(52, 5).unwrap(), 2_598_960);
/// ```
pub fn combination_count(n: usize, r: usize) -> Result<usize> {
    if r > n {
        return Err(Error::out_of_range("r", r, n));
    }
    let k = r.min(n - r);
    let mut count = 1usize;
    for i in 0..k {
        let divisor = i + 1;
        let common = count.gcd(&divisor);
        // (divisor / common) is coprime to (count / common), so it divides (n - i).
        count = (count / common)
            .checked_mul((n - i) / (divisor / common))
            .ok_or_else(|| Error::count_overflow(n, r))?;
    }
    Ok(count)
}
