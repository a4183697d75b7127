// Eager counterparts: materialize everything up front, fail on the first error.

use crate::range::RangeCursor;
use std::mem;

/// `0..n` built in full at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EagerList {
    data: Vec<usize>,
}

impl EagerList {
    pub fn new(n: usize) -> Self {
        Self {
            data: (0..n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.data.iter()
    }

    /// Bytes held on the heap by the backing buffer.
    pub fn heap_bytes(&self) -> usize {
        self.data.capacity() * mem::size_of::<usize>()
    }
}

impl<'a> IntoIterator for &'a EagerList {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Memory held by an eager list versus a lazy cursor over the same range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub eager_bytes: usize,
    pub lazy_bytes: usize,
}

/// Computed from the element size; nothing is allocated.
pub fn footprint(n: usize) -> Footprint {
    Footprint {
        eager_bytes: n
            .saturating_mul(mem::size_of::<usize>())
            .saturating_add(mem::size_of::<EagerList>()),
        lazy_bytes: mem::size_of::<RangeCursor>(),
    }
}

/// Applies `transform` to every element and collects the results.
///
/// Stops at the first failure and returns only that error: whatever was
/// already built is thrown away with it.
pub fn collect_fail_fast<S, F, U, E>(source: S, transform: F) -> Result<Vec<U>, E>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<U, E>,
{
    source.into_iter().map(transform).collect()
}
