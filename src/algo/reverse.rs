/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::traits::PartiallyOrdered;

/// Reverses in place the order of the items, irrespective of the order
/// relation.
pub fn reverse<P: PartiallyOrdered + ?Sized>(data: &mut P) {
    let len = data.len();
    for i in 0..len / 2 {
        data.swap(i, len - 1 - i);
    }
}
