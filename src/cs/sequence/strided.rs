//! Strided slicing with negative-index semantics.
//!
//! ```text
//!   +---+---+---+---+---+
//!   | H | e | l | p | A |
//!   +---+---+---+---+---+
//!     0   1   2   3   4   5
//!    -5  -4  -3  -2  -1
//! ```
//!
//! `[1:3]` and `[-4:-2]` both select `e, l`. A positive step walks forward with default bounds
//! `0..len`; a negative step walks backward from `-1` down to (but excluding) `-len - 1`.
use std::iter::FusedIterator;

use log::trace;

/// Lazily yields `array[start..end]` every `step` elements.
///
/// * `start`, `end`: negative values count from the end (`-1` is the last element). `None`
///   takes the direction's default.
/// * `step`: its sign picks the direction. A zero step yields nothing.
///
/// Out-of-range bounds never panic: a `start` outside `-len..len` gives an empty slice, and
/// `end` is clamped into `-len - 1..=len`.
///
/// # Example
/// ```
/// use seqalgos::cs::sequence::strided::slice;
///
/// let word = ['H', 'e', 'l', 'p', 'A'];
/// assert_eq!(slice(&word, Some(1), Some(3), 1).collect::<String>(), "el");
/// assert_eq!(slice(&word, Some(-4), Some(-2), 1).collect::<String>(), "el");
/// assert_eq!(slice(&word, None, None, -1).collect::<String>(), "ApleH");
/// assert_eq!(slice(&word, None, None, 2).collect::<String>(), "HlA");
/// assert_eq!(slice(&word, None, None, 0).count(), 0);
/// ```
pub fn slice<T>(
    array: &[T],
    start: Option<isize>,
    end: Option<isize>,
    step: isize,
) -> StridedSlice<'_, T> {
    if step == 0 {
        trace!("slice: zero step, nothing to yield");
        return StridedSlice::empty(array);
    }

    let len = isize::try_from(array.len()).unwrap_or(isize::MAX);
    let (default_start, default_end) = if step > 0 { (0, len) } else { (-1, -len - 1) };
    let start = start.unwrap_or(default_start);
    let end = end.unwrap_or(default_end);

    if start < -len || start >= len {
        trace!("slice: start {start} outside array of length {len}");
        return StridedSlice::empty(array);
    }
    let start = to_positive_index(start, len);
    let end = to_positive_index(end.clamp(-len - 1, len), len);

    if (step > 0 && start > end) || (step < 0 && end > start) {
        trace!("slice: bounds {start}..{end} run against step {step}");
        return StridedSlice::empty(array);
    }

    trace!("slice: {start}..{end} by {step}");
    StridedSlice {
        array,
        cursor: start,
        end,
        step,
    }
}

fn to_positive_index(index: isize, len: isize) -> isize {
    if index >= 0 {
        index
    } else {
        index + len
    }
}

/// Reusable slice parameters; [`Default`] is the whole array, forward.
///
/// # Example
/// ```
/// use seqalgos::cs::sequence::strided::SliceBounds;
///
/// let evens_reversed = SliceBounds::new().with_start(-2).with_step(-2);
/// let digits = [0, 1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(evens_reversed.apply(&digits).copied().collect::<Vec<_>>(), vec![6, 4, 2, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBounds {
    pub start: Option<isize>,
    pub end: Option<isize>,
    pub step: isize,
}

impl Default for SliceBounds {
    fn default() -> Self {
        SliceBounds {
            start: None,
            end: None,
            step: 1,
        }
    }
}

impl SliceBounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: isize) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    pub fn apply<'a, T>(&self, array: &'a [T]) -> StridedSlice<'a, T> {
        slice(array, self.start, self.end, self.step)
    }
}

/// Iterator returned by [`slice`]. Each element is produced once, on demand.
#[derive(Debug)]
pub struct StridedSlice<'a, T> {
    array: &'a [T],
    cursor: isize,
    end: isize,
    step: isize,
}

impl<'a, T> StridedSlice<'a, T> {
    fn empty(array: &'a [T]) -> Self {
        StridedSlice {
            array,
            cursor: 0,
            end: 0,
            step: 1,
        }
    }

    fn in_bounds(&self) -> bool {
        if self.step > 0 {
            self.cursor < self.end
        } else {
            self.cursor > self.end
        }
    }
}

impl<'a, T> Iterator for StridedSlice<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.in_bounds() {
            return None;
        }
        let item = &self.array[self.cursor as usize];
        // An overflowing step can only land past `end`.
        self.cursor = self.cursor.checked_add(self.step).unwrap_or(self.end);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for StridedSlice<'_, T> {
    fn len(&self) -> usize {
        let distance = if self.step > 0 {
            self.end.saturating_sub(self.cursor)
        } else {
            self.cursor.saturating_sub(self.end)
        };
        if distance <= 0 {
            0
        } else {
            (distance.unsigned_abs() - 1) / self.step.unsigned_abs() + 1
        }
    }
}

impl<T> FusedIterator for StridedSlice<'_, T> {}

impl<T> Clone for StridedSlice<'_, T> {
    fn clone(&self) -> Self {
        StridedSlice { ..*self }
    }
}
