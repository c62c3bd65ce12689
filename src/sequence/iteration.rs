//! Iteration primitives: forEach, map and reduce.
//!
//! Callbacks always receive the element, its index and the sequence reference
//! that was passed in. They run in ascending index order, one at a time, and
//! cannot stop the traversal early.

use super::{indexed, Sequence};
use crate::errors::{SeqError, SeqResult};

/// Calls `callback(element, index, sequence)` for every element in order.
pub fn iterate<S, F>(sequence: &S, mut callback: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S),
{
    for (index, element) in indexed(sequence) {
        callback(element, index, sequence);
    }
}

/// Builds a new vector whose `i`th element is `callback(sequence[i], i, sequence)`.
///
/// ```
/// use seqkit::transform;
///
/// let input = vec![1, 2, 3];
/// let squared = transform(&input, |el, _, _| el * el);
/// assert_eq!(squared, vec![1, 4, 9]);
/// assert_eq!(input, vec![1, 2, 3]);
/// ```
pub fn transform<S, F, R>(sequence: &S, mut callback: F) -> Vec<R>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> R,
{
    let mut result = Vec::with_capacity(sequence.len());
    for (index, element) in indexed(sequence) {
        result.push(callback(element, index, sequence));
    }
    result
}

/// Reduces the sequence to a single value.
///
/// With `Some(initial)` the callback sees every element, starting at index 0.
/// With `None` the first element seeds the accumulator and the callback starts
/// at index 1. Fails with [`SeqError::EmptySequence`] when there is neither an
/// element nor an initial value.
///
/// ```
/// use seqkit::fold;
///
/// let total = fold(&[1, 2, 3], |acc, el, _, _| acc + el, None).unwrap();
/// assert_eq!(total, 6);
/// let total = fold(&[1, 2, 3], |acc, el, _, _| acc + el, Some(10)).unwrap();
/// assert_eq!(total, 16);
/// ```
pub fn fold<S, F>(sequence: &S, callback: F, initial: Option<S::Item>) -> SeqResult<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(S::Item, &S::Item, usize, &S) -> S::Item,
{
    match initial {
        Some(initial) => Ok(fold_from(sequence, initial, callback)),
        None => {
            let seed = sequence
                .get(0)
                .cloned()
                .ok_or_else(|| SeqError::empty_sequence("fold"))?;
            Ok(fold_range(sequence, 1, seed, callback))
        }
    }
}

/// Reduces the sequence starting from `initial`, visiting every element.
///
/// The accumulator may be of any type; this form cannot fail.
pub fn fold_from<S, A, F>(sequence: &S, initial: A, callback: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item, usize, &S) -> A,
{
    fold_range(sequence, 0, initial, callback)
}

fn fold_range<S, A, F>(sequence: &S, skip: usize, initial: A, mut callback: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item, usize, &S) -> A,
{
    indexed(sequence)
        .skip(skip)
        .fold(initial, |acc, (index, element)| callback(acc, element, index, sequence))
}
