//! Index normalization and bounded slicing.
//!
//! Out-of-range and negative indices never fail: they are clamped onto the
//! `0..=len` boundary, counting negative values back from the end.

use super::{indexed, Sequence};

/// Maps a possibly negative, possibly out-of-range index onto `0..=len`.
///
/// - `index < -len` clamps to `0`
/// - `-len <= index < 0` counts back from the end (`len + index`)
/// - `index > len` clamps to `len`
/// - anything else is returned as is
pub fn normalize_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

/// Copies the elements between normalized `start` (inclusive) and normalized
/// `end` (exclusive) into a new vector.
///
/// `start` defaults to `0` and `end` to the sequence length. An empty vector is
/// returned whenever the normalized start is not before the normalized end.
///
/// ```
/// use seqkit::clamped_slice;
///
/// let s = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(clamped_slice(&s, Some(0), Some(-1)), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(clamped_slice(&s, Some(3), Some(-100)), Vec::<i32>::new());
/// assert_eq!(clamped_slice(&s, Some(-9999), Some(4)), vec![1, 2, 3, 4]);
/// ```
pub fn clamped_slice<S>(sequence: &S, start: Option<isize>, end: Option<isize>) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let len = sequence.len();
    let from = start.map_or(0, |i| normalize_index(i, len));
    let to = end.map_or(len, |i| normalize_index(i, len));

    if from >= to {
        return Vec::new();
    }

    indexed(sequence)
        .skip(from)
        .take(to - from)
        .map(|(_, el)| el.clone())
        .collect()
}
