/// Source of uniform randomness owned by an environment.
///
/// Environments never touch ambient randomness. Everything stochastic
/// (initial states, branching outcomes, actuator noise) is drawn from the
/// source handed to the constructor, so a seeded source together with a fixed
/// action sequence replays an episode exactly.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform integer in `[0, n)`. `n` must be positive.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot draw from an empty range");
        let i = (self.uniform() * n as f64) as usize;
        i.min(n - 1)
    }
}

impl RandomSource for fastrand::Rng {
    fn uniform(&mut self) -> f64 {
        self.f64()
    }

    fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot draw from an empty range");
        self.usize(..n)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn below(&mut self, n: usize) -> usize {
        (**self).below(n)
    }
}
