/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{bail, Context, Result};
use dsi_progress_logger::prelude::*;
use psort::prelude::*;
use psort::utils::chains::random_chains;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut args = std::env::args().skip(1);
    let operation = args.next().context("No operation provided")?;
    let num_chains: usize = args
        .next()
        .context("No number of chains provided")?
        .parse()
        .context("Expected integer number of chains")?;
    let chain_len: usize = args
        .next()
        .context("No chain length provided")?
        .parse()
        .context("Expected integer chain length")?;
    let seed: u64 = match args.next() {
        Some(seed) => seed.parse().context("Expected integer seed")?,
        None => 0,
    };

    let mut main_pl = progress_logger![display_memory = true];
    let mut items = random_chains(num_chains, chain_len, &mut SmallRng::seed_from_u64(seed));
    main_pl.info(format_args!(
        "Generated {} chains of {} items ({} items)",
        num_chains,
        chain_len,
        items.len()
    ));

    match operation.as_str() {
        "sort" => {
            try_top_sort(&mut items, &mut main_pl)?;
        }
        "reverse" => {
            reverse(&mut items);
        }
        _ => bail!("Unknown operation {operation}: expected sort or reverse"),
    }

    main_pl.info(format_args!(
        "The items are {}sorted",
        if is_sorted(&items) { "" } else { "not " }
    ));

    Ok(())
}
