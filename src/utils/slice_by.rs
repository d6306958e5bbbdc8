/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::traits::PartiallyOrdered;

/// A mutable slice partially ordered by a closure.
///
/// The closure must return true if its first argument is less than or equal
/// to its second argument.
///
/// # Examples
///
/// ```
/// use psort::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// // Strings ordered by prefix
/// let mut v = ["abc", "b", "ab", "a", "bcd"];
/// assert!(top_sort(
///     &mut SliceBy::new(&mut v, |a, b| b.starts_with(a)),
///     no_logging![]
/// ));
/// let pos = |s: &str| v.iter().position(|&x| x == s).unwrap();
/// assert!(pos("a") < pos("ab"));
/// assert!(pos("ab") < pos("abc"));
/// assert!(pos("b") < pos("bcd"));
/// ```
pub struct SliceBy<'a, T, F> {
    slice: &'a mut [T],
    less_or_equal: F,
}

impl<'a, T, F: Fn(&T, &T) -> bool> SliceBy<'a, T, F> {
    /// Creates a new partially ordered view of `slice`.
    ///
    /// # Arguments
    /// * `slice`: the items.
    /// * `less_or_equal`: the order relation on the items.
    pub fn new(slice: &'a mut [T], less_or_equal: F) -> Self {
        Self {
            slice,
            less_or_equal,
        }
    }

    /// Returns the items in their current order.
    pub fn as_slice(&self) -> &[T] {
        self.slice
    }
}

impl<T, F: Fn(&T, &T) -> bool> PartiallyOrdered for SliceBy<'_, T, F> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.slice.len()
    }

    #[inline(always)]
    fn less_or_equal(&self, i: usize, j: usize) -> bool {
        (self.less_or_equal)(&self.slice[i], &self.slice[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.slice.swap(i, j);
    }
}
