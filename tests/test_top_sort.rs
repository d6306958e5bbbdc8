/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::prelude::*;
use psort::prelude::*;
use psort::utils::chains::{chains, random_chains, ChainItem};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const A1: ChainItem = ChainItem { chain: 0, rank: 0 };
const A2: ChainItem = ChainItem { chain: 0, rank: 1 };
const A3: ChainItem = ChainItem { chain: 0, rank: 2 };
const B1: ChainItem = ChainItem { chain: 1, rank: 0 };

fn sorted_by_key(items: &[ChainItem]) -> Vec<ChainItem> {
    let mut items = items.to_vec();
    items.sort_by_key(|item| (item.chain, item.rank));
    items
}

#[test]
fn test_already_sorted() {
    let mut items = chains(3, 3);
    assert!(is_sorted(&items));
    assert!(top_sort(&mut items, no_logging![]));
    assert!(is_sorted(&items));
    // A single chain is left untouched
    let mut items = chains(1, 5);
    assert!(top_sort(&mut items, no_logging![]));
    assert_eq!(items, chains(1, 5));
}

#[test]
fn test_top_sort() {
    let mut items = vec![A3, A1, A2];
    assert!(top_sort(&mut items, no_logging![]));
    assert_eq!(items, vec![A1, A2, A3]);

    let mut items = vec![A1, B1];
    assert!(top_sort(&mut items, no_logging![]));
    assert!(is_sorted(&items));
    assert_eq!(sorted_by_key(&items), vec![A1, B1]);

    let mut items = vec![A2, B1, A3, A1];
    assert!(top_sort(&mut items, no_logging![]));
    assert!(is_sorted_pairwise(&items));
    assert_eq!(sorted_by_key(&items), vec![A1, A2, A3, B1]);
}

#[test]
fn test_empty() {
    let mut items: Vec<ChainItem> = vec![];
    assert!(top_sort(&mut items, no_logging![]));
    assert!(is_sorted(&items));
    reverse(&mut items);
    assert!(items.is_empty());
}

#[test]
fn test_random_chains() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..100 {
        let mut items = random_chains(5, 7, &mut rng);
        let before = sorted_by_key(&items);
        assert!(top_sort(&mut items, no_logging![]));
        assert!(is_sorted(&items));
        assert!(is_sorted_pairwise(&items));
        assert_eq!(sorted_by_key(&items), before);
    }
}

#[test]
fn test_with_logger() {
    let mut items = random_chains(4, 4, &mut SmallRng::seed_from_u64(1));
    let mut pl = ProgressLogger::default();
    assert!(top_sort(&mut items, &mut pl));
    assert!(is_sorted_pairwise(&items));
}

#[test]
fn test_cycle() {
    // Rock, paper, scissors
    let mut v = ["rock", "paper", "scissors"];
    let beats = |a: &&str, b: &&str| {
        a == b
            || matches!(
                (*a, *b),
                ("rock", "scissors") | ("scissors", "paper") | ("paper", "rock")
            )
    };
    assert!(!top_sort(&mut SliceBy::new(&mut v, beats), no_logging![]));
    let mut after = v.to_vec();
    after.sort_unstable();
    assert_eq!(after, ["paper", "rock", "scissors"]);

    let err = try_top_sort(&mut SliceBy::new(&mut v, beats), no_logging![]).unwrap_err();
    let n = err.positions.len();
    assert_eq!(n, 3);
    for i in 0..n {
        assert!(beats(&v[err.positions[i]], &v[err.positions[(i + 1) % n]]));
    }
}

#[test]
fn test_duplicates() {
    // Distinct equal items are a cycle
    let mut v = vec![1, 2, 1];
    let err = try_top_sort(&mut v, no_logging![]).unwrap_err();
    assert_eq!(err.positions.len(), 2);
    for &p in err.positions.iter() {
        assert_eq!(v[p], 1);
    }
}

#[test]
fn test_layered() {
    let mut rng = SmallRng::seed_from_u64(0);

    // Divisibility
    let mut v = (1..=256).collect::<Vec<u32>>();
    v.shuffle(&mut rng);
    let divides = |a: &u32, b: &u32| b % a == 0;
    assert!(top_sort(&mut SliceBy::new(&mut v, divides), no_logging![]));
    assert!(is_sorted_pairwise(&SliceBy::new(&mut v, divides)));
    assert_eq!(v[0], 1);

    // Inclusion of bit sets
    let mut v = (0..=255).collect::<Vec<u8>>();
    v.shuffle(&mut rng);
    let subset = |a: &u8, b: &u8| a & b == *a;
    assert!(top_sort(&mut SliceBy::new(&mut v, subset), no_logging![]));
    assert!(is_sorted_pairwise(&SliceBy::new(&mut v, subset)));
    assert_eq!(v[0], 0);
    assert_eq!(v[255], 255);
}

#[test]
fn test_long_chain() {
    // Every item is a successor of all following ones
    let mut v = (0..2000).rev().collect::<Vec<usize>>();
    assert!(top_sort(&mut v, no_logging![]));
    assert_eq!(v, (0..2000).collect::<Vec<_>>());
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_very_long_chain() {
    let mut v = (0..20_000).rev().collect::<Vec<usize>>();
    assert!(top_sort(&mut v, no_logging![]));
    assert_eq!(v, (0..20_000).collect::<Vec<_>>());
}

#[test]
fn test_reverse() {
    let mut items = chains(2, 3);
    reverse(&mut items);
    assert_eq!(
        items.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["B3", "B2", "B1", "A3", "A2", "A1"]
    );
    assert!(!is_sorted(&items));
    reverse(&mut items);
    assert_eq!(items, chains(2, 3));

    let mut items = vec![A1];
    reverse(&mut items);
    assert_eq!(items, vec![A1]);
}
