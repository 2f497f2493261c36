#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Discrete MDP Environments
//!
//! Small, dependency-light environments for generating experience for
//! reinforcement-learning agents. Every environment has a finite state space
//! and a finite action space, and speaks the same episodic
//! [`Env`] contract: [`Env::reset`] starts an episode, [`Env::step`] advances
//! it by one action.
//!
//! ## Key Components
//!
//! -   **Categorical sampling:** [`categorical_sample`] performs inverse-CDF
//!     lookup over a probability vector. Both environments route every
//!     stochastic choice over outcomes through it.
//! -   **Tabular MDPs:** [`DiscreteEnv`] is driven by an explicit transition
//!     table of [`Transition`] records indexed by state, then action.
//! -   **Grid navigation:** [`GridWorld`] is an `n x n` grid with a noisy
//!     actuator, border/bump/step reward shaping, one terminal cell and a
//!     synthetic absorbing state that marks the end of the episode.
//! -   **Randomness:** all draws go through a [`RandomSource`] owned by the
//!     environment. `fastrand::Rng` is the default; tests swap in scripted
//!     sources to pin every draw.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mdp::{Env, GridConfig, GridWorld};
//!
//! let mut env = GridWorld::new(GridConfig::default())?;
//! env.seed(42);
//! let mut state = env.reset();
//! loop {
//!     let step = env.step(1);
//!     state = step.next_state;
//!     if step.done {
//!         break;
//!     }
//! }
//! ```

pub mod discrete;
pub mod env;
pub mod error;
pub mod grid;
pub mod rng;
pub mod sampler;
pub mod space;

pub use discrete::{DiscreteEnv, Transition, PROBABILITY_TOLERANCE};
pub use env::{Env, Info, State, Step};
pub use error::MdpError;
pub use grid::{Action, Coord, GridConfig, GridWorld, StartState};
pub use rng::RandomSource;
pub use sampler::{categorical_index, categorical_sample, sample};
pub use space::Discrete;
