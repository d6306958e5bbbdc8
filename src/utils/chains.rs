/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// An item of a chain.
///
/// Items of the same chain are totally ordered by rank, whereas items of
/// different chains are incomparable. A slice of chain items is thus
/// [partially ordered](crate::algo::traits::PartiallyOrdered).
///
/// Items are displayed as a letter identifying the chain followed by the
/// rank, starting from one, as in `A1`, `A2`, `B1`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct ChainItem {
    /// The chain of the item.
    pub chain: usize,
    /// The rank of the item in its chain.
    pub rank: usize,
}

impl ChainItem {
    pub fn new(chain: usize, rank: usize) -> Self {
        Self { chain, rank }
    }
}

impl PartialOrd for ChainItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.chain == other.chain {
            Some(self.rank.cmp(&other.rank))
        } else {
            None
        }
    }
}

impl fmt::Display for ChainItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chain < 26 {
            write!(f, "{}{}", (b'A' + self.chain as u8) as char, self.rank + 1)
        } else {
            write!(f, "#{}:{}", self.chain, self.rank + 1)
        }
    }
}

/// Returns `num_chains` chains of `chain_len` items each, chain after chain,
/// each chain in increasing order.
///
/// The result is topologically sorted.
pub fn chains(num_chains: usize, chain_len: usize) -> Vec<ChainItem> {
    (0..num_chains)
        .flat_map(|chain| (0..chain_len).map(move |rank| ChainItem::new(chain, rank)))
        .collect()
}

/// Returns the items of [`chains`] in random order.
///
/// # Examples
///
/// ```
/// use psort::prelude::*;
/// use psort::utils::chains::random_chains;
/// use dsi_progress_logger::no_logging;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut v = random_chains(3, 3, &mut SmallRng::seed_from_u64(0));
/// assert!(top_sort(&mut v, no_logging![]));
/// assert!(is_sorted(&v));
/// ```
pub fn random_chains(num_chains: usize, chain_len: usize, rng: &mut impl Rng) -> Vec<ChainItem> {
    let mut items = chains(num_chains, chain_len);
    items.shuffle(rng);
    items
}
