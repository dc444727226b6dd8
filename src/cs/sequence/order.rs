/// Returns true if `items` is entirely non-decreasing or entirely non-increasing.
///
/// # Example
/// ```
/// use seqalgos::cs::sequence::order::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 5]));
/// assert!(is_sorted(&[9, 4, 4, 0]));
/// assert!(!is_sorted(&[1, 3, 2]));
/// ```
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1]) || items.windows(2).all(|w| w[0] >= w[1])
}
