//! # Sequence Utilities
//!
//! Slice and iteration primitives over any ordered, indexable, finite collection.
//!
//! ## Module Structure
//!
//! - **`bounds`**: Index normalization and `clamped_slice`
//! - **`iteration`**: `iterate` (forEach), `transform` (map), `fold` (reduce)
//!
//! None of these functions mutate their input: every one of them takes the
//! sequence by shared reference and hands that same reference to callbacks.

pub mod bounds;
pub mod iteration;

pub use bounds::{clamped_slice, normalize_index};
pub use iteration::{fold, fold_from, iterate, transform};

// ============================================================================
// CORE TRAIT
// ============================================================================

/// An ordered, indexable collection with a known length.
///
/// Implemented for slices, arrays, `Vec<T>` and `im::Vector<T>`; callers can
/// implement it for their own containers.
pub trait Sequence {
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T: Clone> Sequence for im::Vector<T> {
    type Item = T;

    fn len(&self) -> usize {
        im::Vector::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        im::Vector::get(self, index)
    }
}

/// Yields `(index, element)` pairs in ascending index order.
pub(crate) fn indexed<S>(sequence: &S) -> impl Iterator<Item = (usize, &S::Item)> + '_
where
    S: Sequence + ?Sized,
{
    (0..sequence.len()).filter_map(move |index| sequence.get(index).map(|el| (index, el)))
}
