use crate::rng::RandomSource;

/// Inverse-CDF lookup over a sequence of weights.
///
/// Returns the smallest index `i` whose running sum exceeds `draw`. When the
/// weights fall short of `draw` (a vector summing to slightly less than 1
/// under floating-point error) the last index absorbs the residual mass.
/// An empty sequence yields 0.
#[must_use]
pub fn categorical_index<I>(weights: I, draw: f64) -> usize
where
    I: IntoIterator<Item = f64>,
{
    let mut cumulative = 0.0;
    let mut last = 0;
    for (i, weight) in weights.into_iter().enumerate() {
        cumulative += weight;
        if cumulative > draw {
            return i;
        }
        last = i;
    }
    last
}

/// Sample an outcome index from `probabilities` given a uniform `draw` in `[0, 1)`.
///
/// No validation is done here; well-formed vectors are the caller's job.
#[must_use]
pub fn categorical_sample(probabilities: &[f64], draw: f64) -> usize {
    categorical_index(probabilities.iter().copied(), draw)
}

/// Draw once from `rng` and sample an index from `probabilities`.
pub fn sample<R: RandomSource + ?Sized>(probabilities: &[f64], rng: &mut R) -> usize {
    categorical_sample(probabilities, rng.uniform())
}
