/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::traits::PartiallyOrdered;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;
use thiserror::Error;

/// The error returned by [`try_top_sort`] when the order relation contains a
/// cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Not a partial order: found a cycle of {} items at positions {positions:?}", .positions.len())]
pub struct CycleError {
    /// The positions, in the collection as left by the failed sort, of the
    /// items on the cycle.
    ///
    /// Each item is less than or equal to the next one, and the last one is
    /// less than or equal to the first one.
    pub positions: Box<[usize]>,
}

/// Sorts topologically in place a collection of partially ordered items.
///
/// Returns true if the collection has been sorted, and false if the order
/// relation contains a cycle, in which case the collection has been permuted
/// in an unspecified way.
///
/// This is the same as [`try_top_sort`], without the information about the
/// cycle.
///
/// # Examples
///
/// ```
/// use psort::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// // Divisibility is a partial order on positive integers
/// let mut v = [12, 3, 6, 1, 4, 2];
/// assert!(top_sort(&mut SliceBy::new(&mut v, |a, b| b % a == 0), no_logging![]));
/// assert!(is_sorted_pairwise(&SliceBy::new(&mut v, |a, b| b % a == 0)));
/// ```
pub fn top_sort<P: PartiallyOrdered + ?Sized>(data: &mut P, pl: &mut impl ProgressLog) -> bool {
    try_top_sort(data, pl).is_ok()
}

/// Sorts topologically in place a collection of partially ordered items,
/// reporting cycles.
///
/// After a successful call, no item follows an item it is less than or equal
/// to, so both [`is_sorted`](crate::algo::is_sorted()) and
/// [`is_sorted_pairwise`](crate::algo::is_sorted_pairwise()) return true. If
/// the order relation contains a cycle, a [`CycleError`] describing it is
/// returned, and the collection has been permuted in an unspecified way.
///
/// The algorithm is a variant of [Tarjan's depth-first
/// topological sort](https://en.wikipedia.org/wiki/Topological_sorting#Depth-first_search)
/// working on positions: items are placed from the end of the collection
/// toward its start in reverse postorder, and the successors of an item are
/// the unplaced items it is less than or equal to, computed on demand. No arc
/// is ever stored, so the algorithm uses linear space, but it performs a
/// quadratic number of comparisons. The visit is iterative, so it does not
/// need a large stack size.
///
/// The progress logger will be [invoked](ProgressLog::light_update) each time
/// an item is placed.
///
/// # Examples
///
/// ```
/// use psort::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// // Each item precedes its successor modulo 3
/// let mut v = [0, 1, 2];
/// let mut data = SliceBy::new(&mut v, |a, b| a == b || *b == (a + 1) % 3);
/// let cycle = try_top_sort(&mut data, no_logging![]).unwrap_err();
/// assert_eq!(cycle.positions.len(), 3);
/// ```
pub fn try_top_sort<P: PartiallyOrdered + ?Sized>(
    data: &mut P,
    pl: &mut impl ProgressLog,
) -> Result<(), CycleError> {
    let num_items = data.len();
    pl.item_name("item");
    pl.expected_updates(Some(num_items));
    pl.start("Sorting partially ordered items...");

    // Slots identify items: slot s is the item initially at position s.
    // pos[s] is the current position of the item in slot s, and slot is
    // the inverse permutation.
    let mut pos: Box<[usize]> = (0..num_items).collect();
    let mut slot: Box<[usize]> = (0..num_items).collect();
    // Items that have been discovered by the visit
    let mut marked = BitVec::new(num_items);
    // Entries represent a slot on the visit path and the first slot
    // still to be examined as a successor
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(16);
    // Positions in 0..head are unplaced; the others are final
    let mut head = num_items;

    // Placed slots are never unplaced again, so the first unplaced slot
    // can be found by a single forward scan
    for root in 0..num_items {
        if pos[root] >= head {
            continue;
        }

        marked.set(root, true);
        stack.push((root, 0));

        'recurse: while let Some(&(curr, next)) = stack.last() {
            for succ in next..num_items {
                if succ == curr || pos[succ] >= head {
                    continue;
                }

                if data.less_or_equal(pos[curr], pos[succ]) {
                    if marked.get(succ) {
                        // An unplaced marked item is on the visit path
                        let start = stack.iter().rposition(|&(s, _)| s == succ).unwrap_or(0);
                        let positions: Box<[usize]> =
                            stack[start..].iter().map(|&(s, _)| pos[s]).collect();
                        pl.info(format_args!(
                            "Found a cycle of {} items after placing {} items",
                            positions.len(),
                            num_items - head
                        ));
                        pl.done();
                        return Err(CycleError { positions });
                    }

                    marked.set(succ, true);
                    // Resume the scan of curr after succ once succ is placed
                    let depth = stack.len();
                    stack[depth - 1].1 = succ + 1;
                    stack.push((succ, 0));
                    continue 'recurse;
                }
            }

            // All successors have been placed: place curr just before them
            head -= 1;
            let curr_pos = pos[curr];
            if curr_pos != head {
                let other = slot[head];
                data.swap(curr_pos, head);
                pos[other] = curr_pos;
                slot[curr_pos] = other;
                pos[curr] = head;
                slot[head] = curr;
            }

            pl.light_update();
            stack.pop();
        }
    }

    pl.done();
    Ok(())
}
