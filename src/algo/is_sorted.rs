/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::traits::PartiallyOrdered;

/// Returns whether no item is less than or equal to the item preceding it.
///
/// Only adjacent pairs are checked, so this is a linear-time necessary
/// condition for the collection to be topologically sorted. Note that two
/// adjacent items that are equal under the relation make this method return
/// false.
pub fn is_sorted<P: PartiallyOrdered + ?Sized>(data: &P) -> bool {
    (1..data.len()).all(|i| !data.less_or_equal(i, i - 1))
}

/// Returns whether no item is less than or equal to an item preceding it.
///
/// All pairs are checked, so this method performs a quadratic number of
/// comparisons. It is true exactly when the collection is topologically
/// sorted (and contains no two items equal under the relation), as after a
/// successful [`top_sort`](crate::algo::top_sort()).
pub fn is_sorted_pairwise<P: PartiallyOrdered + ?Sized>(data: &P) -> bool {
    let len = data.len();
    (0..len).all(|i| (i + 1..len).all(|j| !data.less_or_equal(j, i)))
}
