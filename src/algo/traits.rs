/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A collection of partially ordered items that can be permuted in place.
///
/// The algorithms of this crate access the items only through their current
/// positions: they ask for the number of items, whether the item at a position
/// is less than or equal to the item at another position, and they exchange
/// the items at two positions. How items are stored and compared is up to the
/// implementation.
///
/// The relation given by [`less_or_equal`](PartiallyOrdered::less_or_equal)
/// is expected to be a non-strict partial order on items: reflexive,
/// antisymmetric and transitive. None of these properties is checked, but two
/// distinct items that are less than or equal to each other will be considered
/// a cycle by [`top_sort`](crate::algo::top_sort()).
///
/// # Examples
///
/// Slices and vectors of [`PartialOrd`] items are partially ordered by `<=`:
///
/// ```
/// use psort::prelude::*;
///
/// let v = vec![3.0, 1.0, 2.0];
/// assert!(v.less_or_equal(1, 2));
/// assert!(!v.less_or_equal(0, 1));
/// ```
pub trait PartiallyOrdered {
    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the item at position `i` is less than or equal to the
    /// item at position `j`, that is, whether it must not come after it in a
    /// sorted collection.
    ///
    /// Must be defined for all `i` and `j` smaller than
    /// [`len`](PartiallyOrdered::len), including `i == j`.
    fn less_or_equal(&self, i: usize, j: usize) -> bool;

    /// Exchanges the items at positions `i` and `j`, leaving all other
    /// positions untouched.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T: PartialOrd> PartiallyOrdered for [T] {
    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn less_or_equal(&self, i: usize, j: usize) -> bool {
        self[i] <= self[j]
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T: PartialOrd> PartiallyOrdered for Vec<T> {
    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn less_or_equal(&self, i: usize, j: usize) -> bool {
        self[i] <= self[j]
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}
