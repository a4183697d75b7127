// Fail-safe streaming: skip and count bad elements instead of aborting.

use colored::Colorize;
use lazy_sequence::{checked_input, filter_map, logging, DemoConfig, LazyRange, RiskyProcessor};

fn main() -> lazy_sequence::Result<()> {
    let config = DemoConfig::from_args()?;
    logging::init(&config.log_level);

    let data = LazyRange::new(config.data_size);
    let mut risky = RiskyProcessor::new(config.failure_rate, config.seed)?;

    // Building the pipeline does no work yet.
    let pipeline = filter_map(&data, |x| checked_input(x).and_then(|x| risky.process(x)));
    println!("{}", "Pipeline built, nothing processed yet".bold());

    let (valid, stats) = pipeline.drain();

    println!("\n{}", "=== Summary ===".bold());
    println!("  Total:     {}", stats.processed);
    println!("  Succeeded: {}", stats.succeeded.to_string().green());
    println!("  Failed:    {}", stats.failed.to_string().red());
    if let Some(rate) = stats.success_rate() {
        println!("  Success rate: {:.1}%", rate * 100.0);
    }
    println!("  Valid results kept: {}", valid.len());
    println!("  First few: {:?}", valid.iter().take(5).collect::<Vec<_>>());

    Ok(())
}
