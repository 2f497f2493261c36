use thiserror::Error;

/// Configuration errors detected while constructing an environment.
///
/// A constructor that returns one of these never yields an instance; fix the
/// configuration and construct again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MdpError {
    #[error("state space must not be empty")]
    NoStates,
    #[error("action space must not be empty")]
    NoActions,
    #[error("transition table covers {found} states, expected {expected}")]
    StateCountMismatch { expected: usize, found: usize },
    #[error("state {state} has transitions for {found} actions, expected {expected}")]
    ActionCountMismatch {
        state: usize,
        expected: usize,
        found: usize,
    },
    #[error("state {state}, action {action} has no outcomes")]
    EmptyTransition { state: usize, action: usize },
    #[error("state {state}, action {action}: next state {next_state} outside [0, {n_states})")]
    NextStateOutOfRange {
        state: usize,
        action: usize,
        next_state: usize,
        n_states: usize,
    },
    #[error("state {state}, action {action}: negative probability {probability}")]
    NegativeProbability {
        state: usize,
        action: usize,
        probability: f64,
    },
    #[error("state {state}, action {action}: probabilities sum to {sum}, expected 1")]
    ProbabilitySum { state: usize, action: usize, sum: f64 },
    #[error("initial-state distribution has {found} entries, expected {expected}")]
    InitialDistributionLength { expected: usize, found: usize },
    #[error("initial-state distribution must be non-negative and sum to 1 (sum {sum})")]
    InitialDistribution { sum: f64 },
    #[error("grid size must be positive")]
    EmptyGrid,
    #[error("a {n}x{n} grid has too many states to index")]
    GridTooLarge { n: usize },
    #[error("noise {0} outside [0, 1]")]
    InvalidNoise(f64),
    #[error("terminal state offset {offset} leaves no terminal cell in a {n}x{n} grid")]
    TerminalOffset { n: usize, offset: usize },
    #[error("start state {start} outside the {cells} grid cells")]
    StartOutOfRange { start: usize, cells: usize },
    #[error("action {0} outside the action set")]
    InvalidAction(usize),
}
