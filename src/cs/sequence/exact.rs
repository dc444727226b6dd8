//! Assertions on how many elements a sequence holds.
use crate::error::{Error, Result};

/// Returns `items` if it holds exactly `count` elements.
///
/// # Example
/// ```
/// use seqalgos::cs::sequence::exact::exactly;
///
/// assert_eq!(exactly(&[1, 2, 3], 3).unwrap(), &[1, 2, 3]);
/// assert!(exactly(&[1, 2, 3], 2).is_err());
/// ```
pub fn exactly<T>(items: &[T], count: usize) -> Result<&[T]> {
    if items.len() == count {
        Ok(items)
    } else {
        Err(Error::count_mismatch(count, items.len()))
    }
}

/// Like [`exactly`], but an empty input gives `Ok(None)` instead of an error.
pub fn exactly_or_empty<T>(items: &[T], count: usize) -> Result<Option<&[T]>> {
    if items.is_empty() {
        return Ok(None);
    }
    exactly(items, count).map(Some)
}

/// The elements matching `predicate`, if there are exactly `count` of them.
pub fn exactly_by<T, P>(items: &[T], count: usize, mut predicate: P) -> Result<Vec<&T>>
where
    P: FnMut(&T) -> bool,
{
    let matched: Vec<&T> = items.iter().filter(|item| predicate(item)).collect();
    if matched.len() == count {
        Ok(matched)
    } else {
        Err(Error::count_mismatch(count, matched.len()))
    }
}

/// Like [`exactly_by`], but no match at all gives `Ok(None)`.
pub fn exactly_or_empty_by<T, P>(
    items: &[T],
    count: usize,
    predicate: P,
) -> Result<Option<Vec<&T>>>
where
    P: FnMut(&T) -> bool,
{
    match exactly_by(items, count, predicate) {
        Err(Error::CountMismatch { found: 0, .. }) => Ok(None),
        other => other.map(Some),
    }
}

pub fn double<T>(items: &[T]) -> Result<&[T]> {
    exactly(items, 2)
}

pub fn double_or_empty<T>(items: &[T]) -> Result<Option<&[T]>> {
    exactly_or_empty(items, 2)
}

pub fn double_by<T, P>(items: &[T], predicate: P) -> Result<Vec<&T>>
where
    P: FnMut(&T) -> bool,
{
    exactly_by(items, 2, predicate)
}

pub fn double_or_empty_by<T, P>(items: &[T], predicate: P) -> Result<Option<Vec<&T>>>
where
    P: FnMut(&T) -> bool,
{
    exactly_or_empty_by(items, 2, predicate)
}
