// Eager vs lazy: build time, memory held, and what survives a failure.

use colored::Colorize;
use lazy_sequence::comprehension::{doubled_lazy, doubled_list, doubled_loop};
use lazy_sequence::eager::footprint;
use lazy_sequence::{
    checked_input, collect_fail_fast, filter_map, logging, DemoConfig, EagerList, FailOn, LazyRange,
};
use std::time::Instant;

const TIMING_SIZE: usize = 10_000_000;

fn main() -> lazy_sequence::Result<()> {
    let config = DemoConfig::from_args()?;
    logging::init(&config.log_level);

    println!("{}", format!("=== Build time (n = {}) ===", TIMING_SIZE).bold());

    let start = Instant::now();
    let looped = doubled_loop(TIMING_SIZE);
    println!("1. push loop:       {:?}", start.elapsed());

    let start = Instant::now();
    let collected = doubled_list(TIMING_SIZE);
    println!("2. collect:         {:?}", start.elapsed());

    let start = Instant::now();
    let mut lazy = doubled_lazy(TIMING_SIZE);
    println!("3. lazy iterator:   {:?} (nothing computed yet)", start.elapsed());
    println!("   first pull only now: {:?}", lazy.next());

    println!("   both hold {} elements", looped.len().min(collected.len()));
    drop(looped);
    drop(collected);

    println!("\n{}", "=== Memory held ===".bold());
    let sizes = footprint(TIMING_SIZE);
    println!(
        "EagerList: {:.2} MB (everything materialized)",
        sizes.eager_bytes as f64 / 1024.0 / 1024.0
    );
    println!("RangeCursor: {} bytes (same for any bound)", sizes.lazy_bytes);

    let eager = EagerList::new(5);
    let range = LazyRange::new(5);
    println!("EagerList(5): {:?}", eager.as_slice());
    println!("LazyRange(5): {:?}", range.begin_traversal().collect::<Vec<_>>());

    println!("\n{}", "=== A failure halfway through ===".bold());
    let bad = config.data_size / 2;
    let transform = FailOn::new(i64::try_from(bad).ok());
    let input = LazyRange::new(config.data_size);

    match collect_fail_fast(&input, |x| checked_input(x).and_then(|x| transform.apply(x))) {
        Ok(values) => println!("fail-fast: {} results", values.len()),
        Err(err) => println!(
            "fail-fast: {} -> every earlier result discarded",
            err.to_string().red()
        ),
    }

    let (kept, stats) =
        filter_map(&input, |x| checked_input(x).and_then(|x| transform.apply(x))).drain();
    println!(
        "fail-safe: kept {} of {} ({} skipped)",
        kept.len().to_string().green(),
        stats.processed,
        stats.failed
    );

    println!("\n{}", "=== Key Points ===".green());
    println!("1. Eager: fast to index, memory grows with n, all-or-nothing on error");
    println!("2. Lazy: constant memory, work happens per pull, single pass");

    Ok(())
}
