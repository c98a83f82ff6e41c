//! Fixed-value source for deterministic runs and tests.

use std::sync::atomic::{AtomicU32, Ordering};

use mealclash_core::error::RandomError;
use mealclash_core::traits::RandomSource;

/// Always returns the same configured value, and tracks how many rolls
/// have been consumed.
pub struct FixedRandom {
    value: f64,
    roll_count: AtomicU32,
}

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            roll_count: AtomicU32::new(0),
        }
    }

    /// Number of rolls consumed so far.
    pub fn roll_count(&self) -> u32 {
        self.roll_count.load(Ordering::Relaxed)
    }
}

impl RandomSource for FixedRandom {
    fn roll(&self) -> Result<f64, RandomError> {
        self.roll_count.fetch_add(1, Ordering::Relaxed);
        if !(0.0..1.0).contains(&self.value) {
            return Err(RandomError::OutOfRange(self.value));
        }
        Ok(self.value)
    }
}
