use crate::env::{Env, Info, State, Step};
use crate::error::MdpError;
use crate::rng::RandomSource;
use crate::space::Discrete;
use tracing::{debug, trace};

/// Moves available on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];
    pub const COUNT: usize = Self::ALL.len();

    /// Checked conversion from an action index.
    ///
    /// # Errors
    ///
    /// Returns [`MdpError::InvalidAction`] for indices outside `[0, 4)`.
    pub fn from_index(index: usize) -> Result<Self, MdpError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(MdpError::InvalidAction(index))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Where episodes begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartState {
    Fixed(State),
    /// Uniform over grid cells; never the absorbing state.
    Random,
}

/// Grid world parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Side length of the grid.
    pub n: usize,
    /// Probability that the requested action is replaced by a uniformly random one.
    pub noise: f64,
    pub terminal_reward: f64,
    pub border_reward: f64,
    pub step_reward: f64,
    pub start_state: StartState,
    pub bump_reward: f64,
    /// Distance of the terminal cell from the last grid cell.
    pub terminal_state_offset: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            n: 10,
            noise: 0.1,
            terminal_reward: 1.0,
            border_reward: 0.0,
            step_reward: 0.0,
            start_state: StartState::Fixed(0),
            bump_reward: -0.5,
            terminal_state_offset: 11,
        }
    }
}

/// Cell position. Row grows downwards, column grows rightwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// `n x n` grid navigation task with a noisy actuator.
///
/// Cells are indexed column-major (`index = col * n + row`). One extra state
/// past the last cell is the absorbing state: leaving the terminal cell moves
/// the agent there, pays `terminal_reward` and ends the episode. Moves that
/// would leave the grid are clamped and leave the agent in place (a bump).
///
/// Transitions are computed on the fly rather than stored in a table.
pub struct GridWorld<R = fastrand::Rng> {
    config: GridConfig,
    n_states: usize,
    terminal_state: State,
    absorbing_state: State,
    state: State,
    done: bool,
    rng: R,
}

impl GridWorld<fastrand::Rng> {
    /// Builds a grid backed by an unseeded `fastrand::Rng`.
    ///
    /// # Errors
    ///
    /// See [`GridWorld::with_rng`].
    pub fn new(config: GridConfig) -> Result<Self, MdpError> {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Reseeds the random source. Does not reset the episode.
    pub fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }
}

impl<R: RandomSource> GridWorld<R> {
    /// Validates `config` and resets to the first start state.
    ///
    /// # Errors
    ///
    /// Returns an [`MdpError`] if `n` is zero or its state count overflows,
    /// `noise` is outside `[0, 1]`, the terminal offset points before the
    /// first cell, or a fixed start state is not a grid cell.
    pub fn with_rng(config: GridConfig, rng: R) -> Result<Self, MdpError> {
        if config.n == 0 {
            return Err(MdpError::EmptyGrid);
        }
        if !(0.0..=1.0).contains(&config.noise) {
            return Err(MdpError::InvalidNoise(config.noise));
        }

        let (cells, n_states) = config
            .n
            .checked_mul(config.n)
            .and_then(|cells| Some((cells, cells.checked_add(1)?)))
            .ok_or(MdpError::GridTooLarge { n: config.n })?;
        let terminal_state = (n_states - 2)
            .checked_sub(config.terminal_state_offset)
            .ok_or(MdpError::TerminalOffset {
                n: config.n,
                offset: config.terminal_state_offset,
            })?;
        if let StartState::Fixed(start) = config.start_state {
            if start >= cells {
                return Err(MdpError::StartOutOfRange { start, cells });
            }
        }

        let mut grid = Self {
            config,
            n_states,
            terminal_state,
            absorbing_state: n_states - 1,
            state: 0,
            done: false,
            rng,
        };
        grid.reset();
        debug!(
            n = config.n,
            noise = config.noise,
            terminal_state,
            absorbing_state = grid.absorbing_state,
            "grid world constructed"
        );
        Ok(grid)
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    #[must_use]
    pub fn terminal_state(&self) -> State {
        self.terminal_state
    }

    #[must_use]
    pub fn absorbing_state(&self) -> State {
        self.absorbing_state
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Column-major decode of a cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a grid cell (the absorbing state included).
    #[must_use]
    pub fn ind2coord(&self, index: State) -> Coord {
        let n = self.config.n;
        assert!(index < n * n, "index {index} outside the {n}x{n} grid");
        Coord {
            row: index % n,
            col: index / n,
        }
    }

    /// Inverse of [`GridWorld::ind2coord`].
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, n)`.
    #[must_use]
    pub fn coord2ind(&self, coord: Coord) -> State {
        let n = self.config.n;
        assert!(coord.row < n, "row {} outside [0, {n})", coord.row);
        assert!(coord.col < n, "col {} outside [0, {n})", coord.col);
        coord.col * n + coord.row
    }

    /// Whether the current cell touches the edge of the grid.
    #[must_use]
    pub fn at_border(&self) -> bool {
        if self.state == self.absorbing_state {
            return false;
        }
        let last = self.config.n - 1;
        let Coord { row, col } = self.ind2coord(self.state);
        row == 0 || row == last || col == 0 || col == last
    }

    /// Advance by one typed action.
    pub fn step_action(&mut self, action: Action) -> Step {
        if self.done || self.state == self.absorbing_state || self.state == self.terminal_state {
            // Reward is paid on leaving the terminal cell; afterwards the
            // absorbing state keeps reporting it.
            if !self.done {
                trace!(state = self.state, "leaving terminal cell");
            }
            self.state = self.absorbing_state;
            self.done = true;
            return Step {
                next_state: self.absorbing_state,
                reward: self.config.terminal_reward,
                done: true,
                info: Info::default(),
            };
        }

        let Coord { mut row, mut col } = self.ind2coord(self.state);

        let action = if self.rng.uniform() < self.config.noise {
            let space = self.action_space();
            Action::ALL[space.sample(&mut self.rng)]
        } else {
            action
        };

        let last = self.config.n - 1;
        match action {
            Action::Up => row = row.saturating_sub(1),
            Action::Down => row = (row + 1).min(last),
            Action::Right => col = (col + 1).min(last),
            Action::Left => col = col.saturating_sub(1),
        }

        let new_state = self.coord2ind(Coord { row, col });
        let reward = self.reward(new_state);
        trace!(
            state = self.state,
            ?action,
            next_state = new_state,
            reward,
            "grid step"
        );
        self.state = new_state;

        Step {
            next_state: new_state,
            reward,
            done: false,
            info: Info::default(),
        }
    }

    /// Reward for moving from the current cell to `new_state`.
    ///
    /// Bump overrides border, border overrides the step reward. A zero
    /// shaping reward never overrides.
    #[allow(clippy::float_cmp)]
    fn reward(&self, new_state: State) -> f64 {
        let mut reward = self.config.step_reward;
        if self.config.border_reward != 0.0 && self.at_border() {
            reward = self.config.border_reward;
        }
        if self.config.bump_reward != 0.0 && new_state == self.state {
            reward = self.config.bump_reward;
        }
        reward
    }
}

impl<R: RandomSource> Env for GridWorld<R> {
    fn reset(&mut self) -> State {
        self.state = match self.config.start_state {
            StartState::Fixed(start) => start,
            StartState::Random => self.rng.below(self.n_states - 1),
        };
        self.done = false;
        trace!(state = self.state, "grid reset");
        self.state
    }

    /// # Panics
    ///
    /// Panics if `action` is not one of the four grid actions.
    fn step(&mut self, action: usize) -> Step {
        assert!(
            self.action_space().contains(action),
            "action {action} outside the grid action set"
        );
        self.step_action(Action::ALL[action])
    }

    fn action_space(&self) -> Discrete {
        Discrete::new(Action::COUNT)
    }

    fn observation_space(&self) -> Discrete {
        Discrete::new(self.n_states)
    }
}
