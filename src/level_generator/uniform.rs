//! Uniform level generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

use crate::{level_generator::LevelGenerator, options::DEFAULT_MAX_LEVEL};

/// Seed used when none is supplied, so that runs are reproducible.
pub const DEFAULT_SEED: u64 = 0x1234_5678;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
/// Errors that can occur when creating a [`Uniform`] level generator.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum UniformError {
    /// At least two levels are needed since no node is ever placed on level
    /// 0 alone.
    #[error("total must be at least 2.")]
    TooFewLevels,
}

/// A level generator drawing uniformly over the available levels.
///
/// A value is drawn uniformly from `$[0, \text{total})$` and a draw of 0 is
/// promoted to 1. Every node therefore reaches at least level 1 and at most
/// level `total - 1`.
///
/// This is deliberately not the classical geometric distribution: towers are
/// much taller on average, and the index relies on the fixed cap rather than
/// a decaying probability to bound them.
#[derive(Debug, Clone)]
pub struct Uniform {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The random number generator.
    rng: SmallRng,
}

impl Uniform {
    /// Create a new uniform level generator with `total` levels whose random
    /// source is seeded with `seed`.
    ///
    /// # Errors
    ///
    /// `total` must be at least 2.
    #[inline]
    pub fn new(total: usize, seed: u64) -> Result<Self, UniformError> {
        if total < 2 {
            return Err(UniformError::TooFewLevels);
        }
        Ok(Uniform {
            total,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
}

impl Default for Uniform {
    /// A generator over [`DEFAULT_MAX_LEVEL`] levels seeded with
    /// [`DEFAULT_SEED`].
    #[inline]
    fn default() -> Self {
        Uniform {
            total: DEFAULT_MAX_LEVEL,
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
        }
    }
}

impl LevelGenerator for Uniform {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    #[inline]
    fn level(&mut self) -> usize {
        match self.rng.random_range(0..self.total) {
            0 => 1,
            level => level,
        }
    }
}
