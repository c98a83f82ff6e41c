//! Thread-local PRNG source.

use rand::Rng;

use mealclash_core::error::RandomError;
use mealclash_core::traits::RandomSource;

/// Random source backed by the thread-local PRNG. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn roll(&self) -> Result<f64, RandomError> {
        Ok(rand::thread_rng().gen_range(0.0..1.0))
    }
}
