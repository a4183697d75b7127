// Factory vs cursor: why an iterable and its iterator should be separate types.

use colored::Colorize;
use lazy_sequence::generator::{lazy_generator, Restartable};
use lazy_sequence::{logging, DemoConfig, LazyRange, RangeCursor};

fn main() -> lazy_sequence::Result<()> {
    let config = DemoConfig::from_args()?;
    logging::init(&config.log_level);

    println!("{}", "=== Single-pass cursor used as its own iterable ===".bold());
    let mut cursor = RangeCursor::new(3);
    let first: Vec<_> = cursor.by_ref().collect();
    let again: Vec<_> = cursor.by_ref().collect();
    println!("first pass:  {:?}", first);
    println!("second pass: {:?}  <- already used up", again);

    println!("\n{}", "=== Restartable factory ===".bold());
    let my_range = LazyRange::new(3);

    let mut iter1 = my_range.begin_traversal();
    println!("iter1: {:?}", iter1.by_ref().collect::<Vec<_>>());

    let iter2 = my_range.begin_traversal();
    println!("iter2: {:?}", iter2.collect::<Vec<_>>());

    // iter1 is spent; iter2 was brand new.
    println!("iter1 again: {:?}", iter1.by_ref().collect::<Vec<_>>());
    println!("iter1 state: {:?}", iter1.state());

    println!("\n{}", "=== Resuming a cursor ===".bold());
    let mut cursor = my_range.begin_traversal();
    println!("pulled: {:?}", cursor.produce_next());
    let rest: Vec<_> = cursor.begin_traversal().collect();
    println!("resumed, not restarted: {:?}", rest);

    println!("\n{}", "=== Generator style ===".bold());
    let n = config.data_size.min(10);
    let generated = Restartable::new(move || lazy_generator(n));
    for run in 1..=2 {
        let values: Vec<_> = generated.begin_traversal().collect();
        println!("run {}: {:?}", run, values);
    }

    println!("\n{}", "=== Empty range ===".bold());
    let mut empty = LazyRange::new(0).begin_traversal();
    println!(
        "first pull: {:?}, exhausted: {}",
        empty.produce_next(),
        empty.is_exhausted()
    );

    println!("\n{}", "=== Key Points ===".green());
    println!("1. The factory keeps no position; each traversal gets its own cursor");
    println!("2. A cursor only moves forward and stays exhausted once it ends");
    println!("3. Iterating a cursor again resumes it, it never restarts");

    Ok(())
}
