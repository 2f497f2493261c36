use mdp::{DiscreteEnv, GridConfig, GridWorld, StartState, Transition};
use runtime::{run_episode, run_episodes};

fn tiny_grid() -> GridWorld {
    // 2x2 grid whose terminal cell is the last one
    GridWorld::new(GridConfig {
        n: 2,
        noise: 0.0,
        start_state: StartState::Fixed(0),
        terminal_state_offset: 0,
        ..GridConfig::default()
    })
    .unwrap()
}

#[test]
fn random_policy_reaches_the_absorbing_state() {
    let mut env = tiny_grid();
    let mut policy = fastrand::Rng::with_seed(3);
    let summary = run_episode(&mut env, &mut policy, 10_000);
    assert!(summary.finished);
    assert!(summary.steps >= 3, "needs two moves and a departure step");
    assert!(env.is_done());
    assert_eq!(env.state(), env.absorbing_state());
}

#[test]
fn step_cap_ends_unfinished_episodes() {
    // self-loop that never terminates
    let table = vec![vec![vec![Transition::new(1.0, 0, 1.0, false)]]];
    let mut env = DiscreteEnv::new(1, 1, table, vec![1.0]).unwrap();
    let mut policy = fastrand::Rng::with_seed(0);
    let summary = run_episode(&mut env, &mut policy, 25);
    assert!(!summary.finished);
    assert_eq!(summary.steps, 25);
    assert_eq!(summary.total_reward, 25.0);
}

#[test]
fn episodes_restart_from_reset() {
    let mut env = tiny_grid();
    let mut policy = fastrand::Rng::with_seed(8);
    let summaries = run_episodes(&mut env, &mut policy, 5, 10_000);
    assert_eq!(summaries.len(), 5);
    assert!(summaries.iter().all(|s| s.finished));
    // the terminal reward is paid exactly once per episode
    for s in &summaries {
        assert!(s.total_reward <= 1.0);
    }
}

#[test]
fn seeded_rollouts_are_reproducible() {
    let run = || {
        let mut env = tiny_grid();
        env.seed(17);
        let mut policy = fastrand::Rng::with_seed(17);
        run_episodes(&mut env, &mut policy, 3, 10_000)
    };
    assert_eq!(run(), run());
}
