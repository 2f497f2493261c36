#![deny(clippy::all, clippy::pedantic)]
//! JSON scenario files describing an environment to roll out.
//!
//! A scenario is either a grid world (`"kind": "grid"`, every parameter
//! optional) or an explicit tabular MDP (`"kind": "table"`).

use anyhow::{bail, Context, Result};
use mdp::{DiscreteEnv, Env, GridConfig, GridWorld, StartState, Transition};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scenario {
    Grid(GridDef),
    Table(TableDef),
}

#[derive(Deserialize)]
#[serde(default)]
pub struct GridDef {
    pub n: usize,
    pub noise: f64,
    pub terminal_reward: f64,
    pub border_reward: f64,
    pub step_reward: f64,
    pub start_state: StartDef,
    pub bump_reward: f64,
    pub terminal_state_offset: usize,
}

/// Either a cell index or the keyword `"random"`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum StartDef {
    Index(usize),
    Keyword(String),
}

#[derive(Deserialize)]
pub struct TableDef {
    pub n_states: usize,
    pub n_actions: usize,
    /// Indexed by state, then action.
    pub transitions: Vec<Vec<Vec<TransitionDef>>>,
    pub isd: Vec<f64>,
}

#[derive(Deserialize)]
pub struct TransitionDef {
    pub probability: f64,
    pub next_state: usize,
    pub reward: f64,
    #[serde(default)]
    pub done: bool,
}

impl Default for GridDef {
    fn default() -> Self {
        let config = GridConfig::default();
        let start_state = match config.start_state {
            StartState::Fixed(s) => StartDef::Index(s),
            StartState::Random => StartDef::Keyword("random".to_owned()),
        };
        Self {
            n: config.n,
            noise: config.noise,
            terminal_reward: config.terminal_reward,
            border_reward: config.border_reward,
            step_reward: config.step_reward,
            start_state,
            bump_reward: config.bump_reward,
            terminal_state_offset: config.terminal_state_offset,
        }
    }
}

impl GridDef {
    /// # Errors
    ///
    /// Fails on a start keyword other than `"random"`.
    pub fn to_config(&self) -> Result<GridConfig> {
        let start_state = match &self.start_state {
            StartDef::Index(s) => StartState::Fixed(*s),
            StartDef::Keyword(k) if k == "random" => StartState::Random,
            StartDef::Keyword(k) => {
                bail!("unknown start state {k:?}, expected an index or \"random\"")
            }
        };
        Ok(GridConfig {
            n: self.n,
            noise: self.noise,
            terminal_reward: self.terminal_reward,
            border_reward: self.border_reward,
            step_reward: self.step_reward,
            start_state,
            bump_reward: self.bump_reward,
            terminal_state_offset: self.terminal_state_offset,
        })
    }
}

fn into_table(transitions: Vec<Vec<Vec<TransitionDef>>>) -> Vec<Vec<Vec<Transition>>> {
    transitions
        .into_iter()
        .map(|actions| {
            actions
                .into_iter()
                .map(|outcomes| {
                    outcomes
                        .into_iter()
                        .map(|t| Transition::new(t.probability, t.next_state, t.reward, t.done))
                        .collect()
                })
                .collect()
        })
        .collect()
}

impl Scenario {
    /// # Errors
    ///
    /// Fails if `json` is not a valid scenario document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scenario document")
    }

    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Short human-readable label for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Scenario::Grid(g) => format!("grid {0}x{0}, noise {1}", g.n, g.noise),
            Scenario::Table(t) => format!("table {} states x {} actions", t.n_states, t.n_actions),
        }
    }

    /// Builds the environment, seeding its random source when `seed` is given.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the environment constructor.
    pub fn into_env(self, seed: Option<u64>) -> Result<Box<dyn Env>> {
        match self {
            Scenario::Grid(def) => {
                let mut env = GridWorld::new(def.to_config()?).context("invalid grid scenario")?;
                if let Some(seed) = seed {
                    env.seed(seed);
                    env.reset();
                }
                tracing::debug!(n_states = env.n_states(), "grid scenario ready");
                Ok(Box::new(env))
            }
            Scenario::Table(def) => {
                let TableDef { n_states, n_actions, transitions, isd } = def;
                let mut env = DiscreteEnv::new(n_states, n_actions, into_table(transitions), isd)
                    .context("invalid table scenario")?;
                if let Some(seed) = seed {
                    env.seed(seed);
                    env.reset();
                }
                tracing::debug!(n_states, n_actions, "table scenario ready");
                Ok(Box::new(env))
            }
        }
    }
}
