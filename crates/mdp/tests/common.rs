#![allow(dead_code)]

use mdp::RandomSource;
use std::collections::VecDeque;

/// Random source that replays a fixed list of uniform draws.
pub struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    pub fn new(draws: &[f64]) -> Self {
        Self { draws: draws.iter().copied().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn uniform(&mut self) -> f64 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}

pub fn seeded(seed: u64) -> fastrand::Rng {
    fastrand::Rng::with_seed(seed)
}
