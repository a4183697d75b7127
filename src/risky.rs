// Fallible per-element transforms used to exercise the pipeline.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    #[error("bad data: {value}")]
    BadData { value: i64 },

    #[error("doubling {value} overflows i64")]
    Overflow { value: i64 },

    #[error("{value} does not fit in i64")]
    OutOfRange { value: usize },

    #[error("failure rate {0} is outside [0, 1]")]
    InvalidFailureRate(f64),
}

/// Checked `x * 2`.
pub fn double(x: i64) -> Result<i64, ProcessError> {
    x.checked_mul(2).ok_or(ProcessError::Overflow { value: x })
}

/// Converts a range position into a transform input without wrapping.
pub fn checked_input(x: usize) -> Result<i64, ProcessError> {
    i64::try_from(x).map_err(|_| ProcessError::OutOfRange { value: x })
}

/// Doubles its input, except for a fixed set of inputs that always fail.
#[derive(Debug, Clone, Default)]
pub struct FailOn {
    bad: HashSet<i64>,
}

impl FailOn {
    pub fn new(bad: impl IntoIterator<Item = i64>) -> Self {
        Self {
            bad: bad.into_iter().collect(),
        }
    }

    pub fn apply(&self, x: i64) -> Result<i64, ProcessError> {
        if self.bad.contains(&x) {
            return Err(ProcessError::BadData { value: x });
        }
        double(x)
    }
}

/// Simulates an unreliable operation: doubles its input but fails with a
/// fixed probability. Seeded, so a given seed always fails on the same calls.
#[derive(Debug, Clone)]
pub struct RiskyProcessor {
    failure_rate: f64,
    rng: StdRng,
}

impl RiskyProcessor {
    pub fn new(failure_rate: f64, seed: u64) -> Result<Self, ProcessError> {
        if !(0.0..=1.0).contains(&failure_rate) {
            return Err(ProcessError::InvalidFailureRate(failure_rate));
        }
        Ok(Self {
            failure_rate,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    pub fn process(&mut self, x: i64) -> Result<i64, ProcessError> {
        if self.rng.gen_bool(self.failure_rate) {
            return Err(ProcessError::BadData { value: x });
        }
        double(x)
    }
}
