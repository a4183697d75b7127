// The four comprehension shapes and the closure binding question.

use colored::Colorize;
use lazy_sequence::comprehension::{
    doubled_lazy, doubled_list, filtered_product, parity_set, per_index_closures, scaled_map,
};
use lazy_sequence::{logging, DemoConfig};

fn main() -> lazy_sequence::Result<()> {
    let config = DemoConfig::from_args()?;
    logging::init(&config.log_level);

    println!("{}", "=== Four shapes ===".bold());
    println!("list (ordered, duplicates): {:?}", doubled_list(3));
    println!("set (deduplicated):         {:?}", parity_set(5));

    let mut map: Vec<_> = scaled_map(3).into_iter().collect();
    map.sort_unstable();
    println!("map (key -> value):         {:?}", map);

    let lazy = doubled_lazy(3);
    println!("lazy (not computed yet), pulled: {:?}", lazy.collect::<Vec<_>>());

    println!("\n{}", "=== Closures capture per index ===".bold());
    let funcs = per_index_closures(5);
    println!("funcs[0]() = {}", funcs[0]());
    println!("all: {:?}", funcs.iter().map(|f| f()).collect::<Vec<_>>());

    println!("\n{}", "=== Nested filters are a cartesian product ===".bold());
    let list_1 = [1, -2, 3];
    let list_2 = [-10, 5, -20];
    println!("a in {:?} if a > 0, b in {:?} if b < 0", list_1, list_2);
    println!("a + b: {:?}", filtered_product(&list_1, &list_2));

    Ok(())
}
