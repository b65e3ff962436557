//! Skiplists spread their nodes over a number of internal levels, whereby the
//! lowest level (level 0) contains every node and each level $n > 0$ contains
//! a subset of the nodes on level $n - 1$.
//!
//! The height of each new node is chosen by a [`LevelGenerator`]. The index
//! ships with [`Uniform`], which draws tower heights uniformly over the
//! available levels. A custom generator can be injected through
//! [`SkipListIndex::with_level_generator`][crate::SkipListIndex::with_level_generator],
//! which is mostly useful to build a list with a known shape in tests.

pub mod uniform;

pub use uniform::Uniform;

// ////////////////////////////////////////////////////////////////////////////
// Level Generator
// ////////////////////////////////////////////////////////////////////////////

/// Upon the insertion of a new node in the list, the node is replicated to
/// higher levels as determined by a [`LevelGenerator`].
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist.
    ///
    /// The head sentinel of the index holds exactly this many links.
    #[must_use]
    fn total(&self) -> usize;

    /// Generate the top level index for a new node.
    ///
    /// This function should _never_ return a level greater or equal to
    /// [`total`][LevelGenerator::total]. The index clamps anything larger
    /// to `total - 1`.
    #[must_use]
    fn level(&mut self) -> usize;
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for &mut G {
    #[inline]
    fn total(&self) -> usize {
        (**self).total()
    }

    #[inline]
    fn level(&mut self) -> usize {
        (**self).level()
    }
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for Box<G> {
    #[inline]
    fn total(&self) -> usize {
        (**self).total()
    }

    #[inline]
    fn level(&mut self) -> usize {
        (**self).level()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use pretty_assertions::assert_eq;

    use super::LevelGenerator;

    /// Hands out a fixed sequence of levels, then level 1 forever.
    #[derive(Debug)]
    pub(crate) struct Scripted {
        pub(crate) total: usize,
        pub(crate) levels: VecDeque<usize>,
    }

    impl Scripted {
        pub(crate) fn new(total: usize, levels: impl IntoIterator<Item = usize>) -> Self {
            Scripted {
                total,
                levels: levels.into_iter().collect(),
            }
        }
    }

    impl LevelGenerator for Scripted {
        fn total(&self) -> usize {
            self.total
        }

        fn level(&mut self) -> usize {
            self.levels.pop_front().unwrap_or(1)
        }
    }

    fn draw(mut generator: impl LevelGenerator) -> (usize, usize) {
        (generator.total(), generator.level())
    }

    #[test]
    fn boxed_and_borrowed() {
        let mut scripted = Scripted::new(4, [3, 2]);
        assert_eq!(draw(&mut scripted), (4, 3));
        let boxed: Box<dyn LevelGenerator> = Box::new(scripted);
        assert_eq!(draw(boxed), (4, 2));
    }
}
