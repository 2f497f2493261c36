#![deny(clippy::all, clippy::pedantic)]
//! Episode rollouts under a uniformly random policy.

use mdp::Env;

/// Outcome of one episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    pub steps: usize,
    pub total_reward: f64,
    /// `false` when the step cap ended the episode.
    pub finished: bool,
}

/// Runs one episode, picking actions uniformly from the action space.
///
/// Stops when the environment reports `done` or after `max_steps` steps.
pub fn run_episode(
    env: &mut dyn Env,
    policy: &mut fastrand::Rng,
    max_steps: usize,
) -> EpisodeSummary {
    let actions = env.action_space();
    let mut state = env.reset();
    let mut summary = EpisodeSummary {
        steps: 0,
        total_reward: 0.0,
        finished: false,
    };

    while summary.steps < max_steps {
        let action = actions.sample(policy);
        let step = env.step(action);
        tracing::trace!(state, action, next_state = step.next_state, reward = step.reward);
        state = step.next_state;
        summary.steps += 1;
        summary.total_reward += step.reward;
        if step.done {
            summary.finished = true;
            break;
        }
    }
    summary
}

/// Runs `episodes` episodes back to back and returns their summaries.
pub fn run_episodes(
    env: &mut dyn Env,
    policy: &mut fastrand::Rng,
    episodes: usize,
    max_steps: usize,
) -> Vec<EpisodeSummary> {
    (0..episodes)
        .map(|episode| {
            let summary = run_episode(env, policy, max_steps);
            tracing::info!(
                episode,
                steps = summary.steps,
                total_reward = summary.total_reward,
                finished = summary.finished,
                "episode complete"
            );
            summary
        })
        .collect()
}
