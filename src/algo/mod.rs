/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms on partially ordered collections.

mod top_sort;
pub use top_sort::*;

mod is_sorted;
pub use is_sorted::*;

mod reverse;
pub use reverse::*;

/// Traits used to interact with the implemented algorithms.
pub mod traits;
