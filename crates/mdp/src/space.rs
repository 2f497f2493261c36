use crate::rng::RandomSource;

/// A finite set `{0, 1, ..., n - 1}`.
///
/// Used to declare both the action count and the state count of an
/// environment so callers can size their policy and value tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    #[must_use]
    pub const fn contains(&self, x: usize) -> bool {
        x < self.n
    }

    /// Uniformly random member of the set.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        rng.below(self.n)
    }
}
