//! Fail-safe streaming pipeline.
//!
//! [`filter_map`] wraps a source and a fallible transform into a lazy
//! sequence. A failing element is logged, counted and skipped; the sequence
//! keeps going. Totals are reported once the source has been drained.
//!
//! ```
//! use lazy_sequence::pipeline::filter_map;
//! use lazy_sequence::risky::FailOn;
//!
//! let transform = FailOn::new([2]);
//! let (values, stats) = filter_map(0..5, |x| transform.apply(x)).drain();
//!
//! assert_eq!(values, vec![0, 2, 6, 8]);
//! assert_eq!((stats.succeeded, stats.failed), (4, 1));
//! ```

use std::fmt::Display;
use std::iter::FusedIterator;
use tracing::{info, warn};

/// Running totals of a pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl PipelineStats {
    /// `None` until at least one element has gone through the transform.
    pub fn success_rate(&self) -> Option<f64> {
        if self.processed == 0 {
            None
        } else {
            Some(self.succeeded as f64 / self.processed as f64)
        }
    }
}

/// Lazy adapter produced by [`filter_map`].
///
/// The transform only runs when a consumer pulls. Build one and never
/// iterate it, and the transform never runs at all.
pub struct SafeProcessor<I, F> {
    source: I,
    transform: F,
    stats: PipelineStats,
    drained: bool,
}

/// Wraps `source` so every element goes through `transform`, dropping the
/// ones that fail.
pub fn filter_map<S, F, U, E>(source: S, transform: F) -> SafeProcessor<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<U, E>,
    E: Display,
{
    SafeProcessor {
        source: source.into_iter(),
        transform,
        stats: PipelineStats::default(),
        drained: false,
    }
}

impl<I, F> SafeProcessor<I, F> {
    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// True once the source has reported its end.
    pub fn is_drained(&self) -> bool {
        self.drained
    }
}

impl<I, F, U, E> SafeProcessor<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Display,
{
    /// Pulls everything and returns the survivors with the final totals.
    pub fn drain(mut self) -> (Vec<U>, PipelineStats) {
        let values = self.by_ref().collect();
        (values, self.stats)
    }
}

impl<I, F, U, E> Iterator for SafeProcessor<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Display,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.drained {
            return None;
        }

        for item in self.source.by_ref() {
            self.stats.processed += 1;
            match (self.transform)(item) {
                Ok(value) => {
                    self.stats.succeeded += 1;
                    return Some(value);
                }
                Err(err) => {
                    self.stats.failed += 1;
                    warn!(error = %err, index = self.stats.processed - 1, "skipping element");
                }
            }
        }

        self.drained = true;
        info!(
            processed = self.stats.processed,
            succeeded = self.stats.succeeded,
            failed = self.stats.failed,
            "pipeline drained"
        );
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.drained {
            return (0, Some(0));
        }
        (0, self.source.size_hint().1)
    }
}

impl<I, F, U, E> FusedIterator for SafeProcessor<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Result<U, E>,
    E: Display,
{
}

/// Method-call form of [`filter_map`].
pub trait FailSafeExt: Iterator + Sized {
    fn fail_safe<F, U, E>(self, transform: F) -> SafeProcessor<Self, F>
    where
        F: FnMut(Self::Item) -> Result<U, E>,
        E: Display,
    {
        SafeProcessor {
            source: self,
            transform,
            stats: PipelineStats::default(),
            drained: false,
        }
    }
}

impl<I: Iterator> FailSafeExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::LazyRange;
    use crate::risky::{checked_input, double, FailOn, ProcessError};
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts `warn` and `info` events seen by the subscriber.
    #[derive(Clone, Default)]
    struct LevelCounter {
        counts: Arc<Mutex<(usize, usize)>>,
    }

    impl LevelCounter {
        fn warn_info(&self) -> (usize, usize) {
            *self.counts.lock().unwrap()
        }
    }

    impl<S: Subscriber> Layer<S> for LevelCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut counts = self.counts.lock().unwrap();
            match *event.metadata().level() {
                Level::WARN => counts.0 += 1,
                Level::INFO => counts.1 += 1,
                _ => {}
            }
        }
    }

    #[test]
    fn test_fail_on_two_scenario() {
        let transform = FailOn::new([2]);
        let mut pipeline = filter_map(vec![0, 1, 2, 3, 4], |x| transform.apply(x));

        let values: Vec<_> = pipeline.by_ref().collect();
        let stats = pipeline.stats();

        assert_eq!(values, vec![0, 2, 6, 8]);
        assert_eq!(stats.succeeded, 4);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.processed, 5);
        assert_eq!(stats.succeeded + stats.failed, stats.processed);
        assert!(pipeline.is_drained());
    }

    #[test]
    fn test_transform_runs_only_on_pull() {
        let calls = Cell::new(0);
        let mut pipeline = filter_map(0..10i64, |x| {
            calls.set(calls.get() + 1);
            double(x)
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(pipeline.next(), Some(0));
        assert_eq!(calls.get(), 1);
        assert_eq!(pipeline.next(), Some(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_drained_pipeline_stays_drained() {
        let mut pipeline = filter_map(0..3i64, double);
        pipeline.by_ref().for_each(drop);
        let stats = pipeline.stats();

        assert_eq!(pipeline.next(), None);
        assert_eq!(pipeline.next(), None);
        assert_eq!(pipeline.stats(), stats);
        assert_eq!(pipeline.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_all_failures_yield_nothing() {
        let (values, stats) =
            filter_map(1..=4i64, |x| Err::<i64, _>(ProcessError::BadData { value: x })).drain();

        assert!(values.is_empty());
        assert_eq!(stats.failed, 4);
        assert_eq!(stats.success_rate(), Some(0.0));
    }

    #[test]
    fn test_empty_source() {
        let (values, stats) =
            filter_map(LazyRange::new(0), |x| checked_input(x).and_then(double)).drain();
        assert!(values.is_empty());
        assert_eq!(stats, PipelineStats::default());
        assert_eq!(stats.success_rate(), None);
    }

    #[test]
    fn test_overflow_is_skipped() {
        let (values, stats) = vec![1, i64::MAX, 3].into_iter().fail_safe(double).drain();
        assert_eq!(values, vec![2, 6]);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_partial_consumption_keeps_counts_so_far() {
        let transform = FailOn::new([1]);
        let mut pipeline = filter_map(0..100i64, |x| transform.apply(x));

        assert_eq!(pipeline.next(), Some(0));
        assert_eq!(pipeline.next(), Some(4));
        assert_eq!(
            pipeline.stats(),
            PipelineStats {
                processed: 3,
                succeeded: 2,
                failed: 1
            }
        );
        assert!(!pipeline.is_drained());
    }

    #[test]
    fn test_one_warn_per_failure_and_one_summary() {
        let counter = LevelCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());

        tracing::subscriber::with_default(subscriber, || {
            let transform = FailOn::new([1, 3]);
            let mut pipeline = filter_map(0..5i64, |x| transform.apply(x));

            assert_eq!(pipeline.by_ref().collect::<Vec<_>>(), vec![0, 4, 8]);
            assert_eq!(pipeline.next(), None);
            assert_eq!(pipeline.next(), None);
        });

        assert_eq!(counter.warn_info(), (2, 1));
    }

    #[test]
    fn test_no_summary_before_drain() {
        let counter = LevelCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());

        tracing::subscriber::with_default(subscriber, || {
            let transform = FailOn::new([0]);
            let mut pipeline = filter_map(0..5i64, |x| transform.apply(x));
            assert_eq!(pipeline.next(), Some(2));
        });

        assert_eq!(counter.warn_info(), (1, 0));
    }

    proptest! {
        #[test]
        fn prop_counts_add_up(
            input in prop::collection::vec(-1000i64..1000, 0..200),
            modulus in 1i64..7,
        ) {
            let (values, stats) = filter_map(input.clone(), |x| {
                if x.rem_euclid(modulus) == 0 {
                    Err(ProcessError::BadData { value: x })
                } else {
                    double(x)
                }
            })
            .drain();

            prop_assert_eq!(stats.processed, input.len());
            prop_assert_eq!(stats.succeeded + stats.failed, stats.processed);
            prop_assert_eq!(values.len(), stats.succeeded);

            let expected: Vec<_> = input
                .iter()
                .filter(|x| x.rem_euclid(modulus) != 0)
                .map(|x| x * 2)
                .collect();
            prop_assert_eq!(values, expected);
        }
    }
}
