//! # Lazy Sequences
//!
//! Restartable lazy sequences and the single-pass cursors they hand out,
//! with an eager counterpart for contrast and a fail-safe streaming pipeline.
//!
//! ## Pieces
//!
//! 1. **Factory vs cursor** ([`range`])
//!    - `LazyRange` is the iterable: every traversal starts a fresh cursor
//!    - `RangeCursor` is the iterator: single pass, never restarts
//!
//! 2. **Generator style** ([`generator`])
//!    - Closure-backed `lazy_generator`
//!    - `Restartable` turns any cursor constructor into a factory
//!
//! 3. **Eager evaluation** ([`eager`])
//!    - `EagerList` materializes everything up front
//!    - Fail-fast collection loses all partial results on the first error
//!
//! 4. **Fail-safe pipeline** ([`pipeline`])
//!    - `filter_map(source, transform)` skips and counts failures
//!
//! 5. **Comprehension shapes** ([`comprehension`])
//!
//! ```
//! use lazy_sequence::LazyRange;
//!
//! let range = LazyRange::new(3);
//! let first: Vec<_> = range.begin_traversal().collect();
//! let second: Vec<_> = range.begin_traversal().collect();
//! assert_eq!(first, vec![0, 1, 2]);
//! assert_eq!(first, second);
//! ```

pub mod comprehension;
pub mod config;
pub mod eager;
pub mod error;
pub mod generator;
pub mod logging;
pub mod pipeline;
pub mod range;
pub mod risky;

pub use config::{ConfigError, DemoConfig};
pub use eager::{collect_fail_fast, EagerList};
pub use error::{Error, Result};
pub use generator::{lazy_generator, Restartable};
pub use pipeline::{filter_map, FailSafeExt, PipelineStats, SafeProcessor};
pub use range::{CursorState, LazyRange, RangeCursor};
pub use risky::{checked_input, FailOn, ProcessError, RiskyProcessor};
