// Generator-function style: the same lazy range expressed as a closure that
// captures its own state, plus a factory that makes any such constructor restartable.

use std::iter::{self, FusedIterator};

/// Lazily yields `0..n`, one value per pull.
///
/// Behaves exactly like [`RangeCursor`](crate::range::RangeCursor) but the
/// position lives inside the closure instead of a named struct.
pub fn lazy_generator(n: usize) -> impl FusedIterator<Item = usize> {
    let mut current = 0;
    iter::from_fn(move || {
        if current < n {
            let value = current;
            current += 1;
            Some(value)
        } else {
            None
        }
    })
    .fuse()
}

/// Turns a cursor constructor into a restartable lazy sequence.
///
/// Every call to [`begin_traversal`](Restartable::begin_traversal) runs the
/// constructor again, so traversals never share a position.
#[derive(Clone)]
pub struct Restartable<F> {
    make: F,
}

impl<F, I> Restartable<F>
where
    F: Fn() -> I,
    I: Iterator,
{
    pub fn new(make: F) -> Self {
        Self { make }
    }

    pub fn begin_traversal(&self) -> I {
        (self.make)()
    }
}

impl<'a, F, I> IntoIterator for &'a Restartable<F>
where
    F: Fn() -> I,
    I: Iterator,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_traversal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::LazyRange;
    use proptest::prelude::*;

    #[test]
    fn test_generator_is_lazy_and_fused() {
        let mut numbers = lazy_generator(2);
        assert_eq!(numbers.next(), Some(0));
        assert_eq!(numbers.next(), Some(1));
        assert_eq!(numbers.next(), None);
        assert_eq!(numbers.next(), None);
    }

    #[test]
    fn test_restartable_generator_independent_traversals() {
        let seq = Restartable::new(|| lazy_generator(3));

        let mut first = seq.begin_traversal();
        assert_eq!(first.next(), Some(0));

        let second: Vec<_> = (&seq).into_iter().collect();
        assert_eq!(second, vec![0, 1, 2]);

        assert_eq!(first.collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_restartable_counts_constructions() {
        use std::cell::Cell;

        let built = Cell::new(0);
        let seq = Restartable::new(|| {
            built.set(built.get() + 1);
            lazy_generator(1)
        });

        // Nothing is built until a traversal begins.
        assert_eq!(built.get(), 0);
        for _ in &seq {}
        for _ in &seq {}
        assert_eq!(built.get(), 2);
    }

    proptest! {
        #[test]
        fn prop_generator_matches_cursor(n in 0usize..300) {
            let from_gen: Vec<_> = lazy_generator(n).collect();
            let from_cursor: Vec<_> = LazyRange::new(n).begin_traversal().collect();
            prop_assert_eq!(from_gen, from_cursor);
        }
    }
}
