use crate::space::Discrete;

/// Index of a state in `[0, n_states)`.
pub type State = usize;

/// Diagnostic side channel of a step. Never needed for correctness.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Info {
    /// Probability of the sampled outcome, for table-driven environments.
    pub probability: Option<f64>,
}

/// Result of advancing an environment by one action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub next_state: State,
    pub reward: f64,
    pub done: bool,
    pub info: Info,
}

/// Episodic environment over a discrete state space.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the
/// interface a training loop drives: [`reset`] begins an episode and
/// [`step`] advances it by one action, returning the next state, a reward and
/// whether the episode has terminated.
///
/// `action` must be a member of [`action_space`]. Rejecting out-of-range
/// actions is the caller's job; implementations panic on them.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
/// [`action_space`]: Env::action_space
pub trait Env {
    /// Begin a new episode and return the initial state.
    fn reset(&mut self) -> State;

    /// Advance the environment by one action.
    fn step(&mut self, action: usize) -> Step;

    /// Declared action set.
    fn action_space(&self) -> Discrete;

    /// Declared state set.
    fn observation_space(&self) -> Discrete;

    /// Visual output is not produced by these environments.
    fn render(&self) {}
}
