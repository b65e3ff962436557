//! Construction-time configuration.

use crate::{error::Error, level_generator::uniform::DEFAULT_SEED};

/// The default number of levels.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// The largest number of levels accepted by [`Options::with_max_level`].
///
/// A uniform draw over more levels than this only makes towers taller without
/// making searches any shorter.
pub const MAX_LEVEL_LIMIT: usize = 64;

/// Options for creating a [`SkipListIndex`](crate::SkipListIndex).
///
/// # Examples
///
/// ```
/// use skipindex::{Options, SkipListIndex};
///
/// let options = Options::new().with_max_level(8).with_seed(42);
/// let index: SkipListIndex<u64, &str> = SkipListIndex::with_options(u64::MAX, options).unwrap();
/// assert_eq!(index.max_level(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    max_level: usize,
    seed: u64,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Create a new set of options with the default values: 16 levels and a
    /// fixed seed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            seed: DEFAULT_SEED,
        }
    }

    /// Set the number of levels, i.e. the number of links the head sentinel
    /// holds. Tower heights of new nodes range over `1..max_level`.
    ///
    /// Default is `16`.
    #[inline]
    #[must_use]
    pub const fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    /// Set the seed of the random source used to pick tower heights.
    ///
    /// Two indexes built with the same seed and fed the same insertions have
    /// the same shape.
    #[inline]
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the number of levels.
    #[inline]
    pub const fn max_level(&self) -> usize {
        self.max_level
    }

    /// Returns the seed.
    #[inline]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Check that the options describe a usable index.
    ///
    /// # Errors
    ///
    /// Fails if `max_level` is below 2 or above [`MAX_LEVEL_LIMIT`].
    pub(crate) const fn validate(&self) -> Result<(), Error> {
        if self.max_level < 2 {
            return Err(Error::MaxLevelTooSmall(self.max_level));
        }
        if self.max_level > MAX_LEVEL_LIMIT {
            return Err(Error::MaxLevelTooLarge {
                max: MAX_LEVEL_LIMIT,
                got: self.max_level,
            });
        }
        Ok(())
    }
}
