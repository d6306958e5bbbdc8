/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
}

/// Use `use psort::prelude::*;` to import the algorithms, the adapters and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::{is_sorted, is_sorted_pairwise, reverse, top_sort, try_top_sort, CycleError};
    pub use traits::*;
    pub use utils::SliceBy;
}
