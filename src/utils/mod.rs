/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod slice_by;
pub use slice_by::SliceBy;

/// Collections of independent chains, for testing and benchmarking.
pub mod chains;
