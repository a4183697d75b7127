// The four comprehension shapes (list, set, map, lazy) as iterator chains.

use itertools::iproduct;
use std::collections::{HashMap, HashSet};

/// Eager, ordered, keeps duplicates: `[x * 2 for x in 0..n]`.
pub fn doubled_list(n: usize) -> Vec<usize> {
    (0..n).map(|x| x * 2).collect()
}

/// Built the same way as [`doubled_list`] but with an explicit push loop.
pub fn doubled_loop(n: usize) -> Vec<usize> {
    let mut res = Vec::new();
    for x in 0..n {
        res.push(x * 2);
    }
    res
}

/// Unordered, deduplicated: `{x % 2 for x in 0..n}`.
pub fn parity_set(n: usize) -> HashSet<usize> {
    (0..n).map(|x| x % 2).collect()
}

/// Key/value mapping: `{x: x * 10 for x in 0..n}`.
pub fn scaled_map(n: usize) -> HashMap<usize, usize> {
    (0..n).map(|x| (x, x * 10)).collect()
}

/// Nothing is computed until the caller pulls.
pub fn doubled_lazy(n: usize) -> impl Iterator<Item = usize> {
    (0..n).map(|x| x * 2)
}

/// Nested loop, not a zip: every positive `a` paired with every negative `b`.
pub fn filtered_product(a: &[i64], b: &[i64]) -> Vec<i64> {
    iproduct!(
        a.iter().filter(|&&x| x > 0),
        b.iter().filter(|&&y| y < 0)
    )
    .map(|(x, y)| x + y)
    .collect()
}

/// One closure per index, each returning `i * 2`.
///
/// `move` copies `i` into every closure when it is created, so closure `k`
/// really returns `k * 2` instead of sharing the last value of the loop.
pub fn per_index_closures(n: usize) -> Vec<Box<dyn Fn() -> usize>> {
    (0..n)
        .map(|i| Box::new(move || i * 2) as Box<dyn Fn() -> usize>)
        .collect()
}
