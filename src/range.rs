// Restartable lazy range: a stateless factory and the single-pass cursors it hands out.
//
// `LazyRange` is the iterable, `RangeCursor` is the iterator. Keeping them as two
// types means a traversal can never leak its position into the next one.

use std::iter::FusedIterator;

//==============================================================================
// Cursor state machine
//==============================================================================

/// Position of a cursor within its traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// `current` is the next value to hand out. Always `<= bound`.
    Active { current: usize },
    /// Terminal. Every further pull yields nothing.
    Exhausted,
}

impl CursorState {
    pub const START: CursorState = CursorState::Active { current: 0 };
}

/// One step of the cursor state machine.
///
/// `Active(c)` with `c < bound` emits `c` and moves to `Active(c + 1)`.
/// `Active(bound)` and `Exhausted` both emit nothing and land on `Exhausted`.
pub fn advance(state: CursorState, bound: usize) -> (Option<usize>, CursorState) {
    match state {
        CursorState::Active { current } if current < bound => {
            (Some(current), CursorState::Active { current: current + 1 })
        }
        CursorState::Active { .. } | CursorState::Exhausted => (None, CursorState::Exhausted),
    }
}

//==============================================================================
// RangeCursor: single-pass iterator
//==============================================================================

/// A single traversal over `0..bound`.
///
/// Pulling a value moves the cursor forward for good. Iterating a cursor again
/// (`for x in &mut cursor`, or `into_iter()` on an owned one) resumes where it
/// stopped instead of starting over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCursor {
    bound: usize,
    state: CursorState,
}

impl RangeCursor {
    /// Creates a cursor positioned at 0.
    ///
    /// Prefer [`LazyRange::begin_traversal`] when the sequence has to be walked
    /// more than once.
    pub fn new(bound: usize) -> Self {
        Self {
            bound,
            state: CursorState::START,
        }
    }

    /// Produces the next value, or `None` once the range is used up.
    pub fn produce_next(&mut self) -> Option<usize> {
        let (value, next) = advance(self.state, self.bound);
        self.state = next;
        value
    }

    /// Identity traversal: hands back this same cursor.
    pub fn begin_traversal(&mut self) -> &mut Self {
        self
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Number of values already handed out.
    pub fn position(&self) -> usize {
        match self.state {
            CursorState::Active { current } => current,
            CursorState::Exhausted => self.bound,
        }
    }

    pub fn remaining(&self) -> usize {
        self.bound - self.position()
    }

    /// True once a pull has observed the end of the range.
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }
}

impl Iterator for RangeCursor {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeCursor {}

impl FusedIterator for RangeCursor {}

//==============================================================================
// LazyRange: restartable factory
//==============================================================================

/// Factory for independent traversals over `0..bound`.
///
/// Holds no position of its own, so `for x in &range` can run any number of
/// times and every run sees the full sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LazyRange {
    bound: usize,
}

impl LazyRange {
    pub fn new(bound: usize) -> Self {
        Self { bound }
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Returns a brand new cursor at position 0.
    pub fn begin_traversal(&self) -> RangeCursor {
        RangeCursor::new(self.bound)
    }
}

impl IntoIterator for &LazyRange {
    type Item = usize;
    type IntoIter = RangeCursor;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_traversal()
    }
}

impl IntoIterator for LazyRange {
    type Item = usize;
    type IntoIter = RangeCursor;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_traversal()
    }
}
