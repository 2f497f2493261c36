use crate::env::{Env, Info, State, Step};
use crate::error::MdpError;
use crate::rng::RandomSource;
use crate::sampler::{categorical_index, sample};
use crate::space::Discrete;
use tracing::{debug, trace};

/// Slack allowed when checking that a probability row sums to 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// One branch of a stochastic transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub probability: f64,
    pub next_state: State,
    pub reward: f64,
    pub done: bool,
}

impl Transition {
    #[must_use]
    pub const fn new(probability: f64, next_state: State, reward: f64, done: bool) -> Self {
        Self {
            probability,
            next_state,
            reward,
            done,
        }
    }
}

/// Tabular MDP driven by an explicit transition table.
///
/// `table[s][a]` lists the outcomes of taking action `a` in state `s`; their
/// probabilities sum to 1. The initial state of every episode is drawn from
/// `isd`. The current state is the only thing that changes between steps.
pub struct DiscreteEnv<R = fastrand::Rng> {
    n_states: usize,
    n_actions: usize,
    table: Vec<Vec<Vec<Transition>>>,
    isd: Vec<f64>,
    state: State,
    last_action: Option<usize>,
    rng: R,
}

impl DiscreteEnv<fastrand::Rng> {
    /// Builds an environment backed by an unseeded `fastrand::Rng`.
    ///
    /// # Errors
    ///
    /// See [`DiscreteEnv::with_rng`].
    pub fn new(
        n_states: usize,
        n_actions: usize,
        table: Vec<Vec<Vec<Transition>>>,
        isd: Vec<f64>,
    ) -> Result<Self, MdpError> {
        Self::with_rng(n_states, n_actions, table, isd, fastrand::Rng::new())
    }

    /// Reseeds the random source. Does not reset the episode.
    pub fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }
}

impl<R: RandomSource> DiscreteEnv<R> {
    /// Validates the table and distribution, then draws the first initial state.
    ///
    /// # Errors
    ///
    /// Returns an [`MdpError`] if either count is zero, the table does not
    /// cover every `(state, action)` pair, an outcome points outside the state
    /// space, a probability row is negative or does not sum to 1, or `isd` has
    /// the wrong length or is not a distribution.
    pub fn with_rng(
        n_states: usize,
        n_actions: usize,
        table: Vec<Vec<Vec<Transition>>>,
        isd: Vec<f64>,
        rng: R,
    ) -> Result<Self, MdpError> {
        validate_table(n_states, n_actions, &table)?;
        validate_isd(n_states, &isd)?;

        let mut env = Self {
            n_states,
            n_actions,
            table,
            isd,
            state: 0,
            last_action: None,
            rng,
        };
        env.reset();
        debug!(n_states, n_actions, "tabular MDP constructed");
        Ok(env)
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Action of the most recent step, cleared by `reset`.
    #[must_use]
    pub fn last_action(&self) -> Option<usize> {
        self.last_action
    }

    #[must_use]
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    #[must_use]
    pub fn n_actions(&self) -> usize {
        self.n_actions
    }

    /// Outcomes of taking `action` in `state`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the table.
    #[must_use]
    pub fn transitions(&self, state: State, action: usize) -> &[Transition] {
        &self.table[state][action]
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: RandomSource> Env for DiscreteEnv<R> {
    fn reset(&mut self) -> State {
        self.state = sample(&self.isd, &mut self.rng);
        self.last_action = None;
        trace!(state = self.state, "tabular reset");
        self.state
    }

    fn step(&mut self, action: usize) -> Step {
        let outcomes = &self.table[self.state][action];
        let draw = self.rng.uniform();
        let i = categorical_index(outcomes.iter().map(|t| t.probability), draw);
        let chosen = outcomes[i];

        trace!(
            state = self.state,
            action,
            next_state = chosen.next_state,
            reward = chosen.reward,
            done = chosen.done,
            "tabular step"
        );
        self.state = chosen.next_state;
        self.last_action = Some(action);

        Step {
            next_state: chosen.next_state,
            reward: chosen.reward,
            done: chosen.done,
            info: Info {
                probability: Some(chosen.probability),
            },
        }
    }

    fn action_space(&self) -> Discrete {
        Discrete::new(self.n_actions)
    }

    fn observation_space(&self) -> Discrete {
        Discrete::new(self.n_states)
    }
}

fn validate_table(
    n_states: usize,
    n_actions: usize,
    table: &[Vec<Vec<Transition>>],
) -> Result<(), MdpError> {
    if n_states == 0 {
        return Err(MdpError::NoStates);
    }
    if n_actions == 0 {
        return Err(MdpError::NoActions);
    }
    if table.len() != n_states {
        return Err(MdpError::StateCountMismatch {
            expected: n_states,
            found: table.len(),
        });
    }

    for (state, row) in table.iter().enumerate() {
        if row.len() != n_actions {
            return Err(MdpError::ActionCountMismatch {
                state,
                expected: n_actions,
                found: row.len(),
            });
        }
        for (action, outcomes) in row.iter().enumerate() {
            if outcomes.is_empty() {
                return Err(MdpError::EmptyTransition { state, action });
            }
            let mut sum = 0.0;
            for t in outcomes {
                if t.next_state >= n_states {
                    return Err(MdpError::NextStateOutOfRange {
                        state,
                        action,
                        next_state: t.next_state,
                        n_states,
                    });
                }
                if t.probability < 0.0 {
                    return Err(MdpError::NegativeProbability {
                        state,
                        action,
                        probability: t.probability,
                    });
                }
                sum += t.probability;
            }
            if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
                return Err(MdpError::ProbabilitySum { state, action, sum });
            }
        }
    }
    Ok(())
}

fn validate_isd(n_states: usize, isd: &[f64]) -> Result<(), MdpError> {
    if isd.len() != n_states {
        return Err(MdpError::InitialDistributionLength {
            expected: n_states,
            found: isd.len(),
        });
    }
    let sum: f64 = isd.iter().sum();
    if isd.iter().any(|&w| w < 0.0) || (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(MdpError::InitialDistribution { sum });
    }
    Ok(())
}
