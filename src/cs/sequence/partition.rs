use std::slice::Chunks;

use crate::error::{Error, Result};

/// Splits `items` into consecutive chunks of `size`; the last chunk may be shorter.
///
/// # Example
/// ```
/// use seqalgos::cs::sequence::partition::chunk;
///
/// let chunks: Vec<&[i32]> = chunk(&[1, 2, 3, 4, 5], 2).unwrap().collect();
/// assert_eq!(chunks, vec![&[1, 2][..], &[3, 4], &[5]]);
/// ```
pub fn chunk<T>(items: &[T], size: usize) -> Result<Chunks<'_, T>> {
    if size == 0 {
        return Err(Error::zero_count("chunk size"));
    }
    Ok(items.chunks(size))
}

/// Deals `items` round-robin into at most `parts` groups: element `i` goes to group `i % parts`.
///
/// Groups that would stay empty (fewer items than parts) are not returned.
///
/// # Example
/// ```
/// use seqalgos::cs::sequence::partition::split;
///
/// let groups = split(&[1, 2, 3, 4, 5, 6, 7], 3).unwrap();
/// assert_eq!(groups, vec![vec![1, 4, 7], vec![2, 5], vec![3, 6]]);
/// ```
pub fn split<T: Clone>(items: &[T], parts: usize) -> Result<Vec<Vec<T>>> {
    if parts == 0 {
        return Err(Error::zero_count("parts"));
    }
    let groups = parts.min(items.len());
    let mut out: Vec<Vec<T>> = (0..groups)
        .map(|g| Vec::with_capacity((items.len() - g).div_ceil(parts)))
        .collect();
    for (i, item) in items.iter().enumerate() {
        out[i % parts].push(item.clone());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_exact_and_ragged() {
        let items: Vec<u8> = (1..=6).collect();
        assert_eq!(chunk(&items, 3).unwrap().count(), 2);
        let last = chunk(&items, 4).unwrap().last().unwrap();
        assert_eq!(last, &[5, 6]);
        assert_eq!(chunk(&items, 10).unwrap().count(), 1);
        assert_eq!(chunk(&Vec::<u8>::new(), 2).unwrap().count(), 0);
    }

    #[test]
    fn test_chunk_zero_size() {
        assert_eq!(chunk(&[1, 2], 0).unwrap_err(), Error::zero_count("chunk size"));
    }

    #[test]
    fn test_split_fewer_items_than_parts() {
        assert_eq!(split(&['a', 'b'], 5).unwrap(), vec![vec!['a'], vec!['b']]);
        assert!(split(&Vec::<char>::new(), 3).unwrap().is_empty());
    }

    #[test]
    fn test_split_keeps_every_item_once() {
        let items: Vec<u32> = (0..23).collect();
        let groups = split(&items, 4).unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups.iter().map(Vec::len).collect::<Vec<_>>(), vec![6, 6, 6, 5]);
        let mut all: Vec<u32> = groups.concat();
        all.sort();
        assert_eq!(all, items);
    }

    #[test]
    fn test_split_zero_parts() {
        assert_eq!(split(&[1], 0), Err(Error::zero_count("parts")));
    }
}
