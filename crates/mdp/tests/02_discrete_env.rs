mod common;

use common::ScriptedRng;
use mdp::{DiscreteEnv, Env, Info, MdpError, Step, Transition};

fn two_state_table() -> Vec<Vec<Vec<Transition>>> {
    vec![
        vec![vec![Transition::new(1.0, 1, 5.0, true)]],
        vec![vec![Transition::new(1.0, 1, 0.0, true)]],
    ]
}

/// State 0, action 0 slips back to 0 half the time; action 1 always reaches 1.
fn slippery_table() -> Vec<Vec<Vec<Transition>>> {
    vec![
        vec![
            vec![
                Transition::new(0.5, 0, 0.0, false),
                Transition::new(0.5, 1, 1.0, true),
            ],
            vec![Transition::new(1.0, 1, 1.0, true)],
        ],
        vec![
            vec![Transition::new(1.0, 1, 0.0, true)],
            vec![Transition::new(1.0, 1, 0.0, true)],
        ],
    ]
}

#[test]
fn deterministic_two_state_episode() {
    let mut env = DiscreteEnv::new(2, 1, two_state_table(), vec![1.0, 0.0]).unwrap();
    env.seed(3);
    assert_eq!(env.reset(), 0);
    let step = env.step(0);
    assert_eq!(
        step,
        Step {
            next_state: 1,
            reward: 5.0,
            done: true,
            info: Info { probability: Some(1.0) },
        }
    );
    assert_eq!(env.state(), 1);
    assert_eq!(env.last_action(), Some(0));
}

#[test]
fn branching_outcome_follows_the_draw() {
    // construction reset, explicit reset, then one draw per step
    let rng = ScriptedRng::new(&[0.0, 0.0, 0.25, 0.75]);
    let mut env = DiscreteEnv::with_rng(2, 2, slippery_table(), vec![1.0, 0.0], rng).unwrap();
    assert_eq!(env.reset(), 0);

    let slip = env.step(0);
    assert_eq!(slip.next_state, 0);
    assert_eq!(slip.reward, 0.0);
    assert!(!slip.done);
    assert_eq!(slip.info.probability, Some(0.5));

    let reach = env.step(0);
    assert_eq!(reach.next_state, 1);
    assert_eq!(reach.reward, 1.0);
    assert!(reach.done);
    assert_eq!(env.rng_mut().remaining(), 0);
}

#[test]
fn reset_draws_from_initial_distribution() {
    let table = vec![
        vec![vec![Transition::new(1.0, 0, 0.0, false)]],
        vec![vec![Transition::new(1.0, 1, 0.0, false)]],
        vec![vec![Transition::new(1.0, 2, 0.0, false)]],
    ];
    let rng = ScriptedRng::new(&[0.1, 0.3, 0.9]);
    let mut env = DiscreteEnv::with_rng(3, 1, table, vec![0.25, 0.5, 0.25], rng).unwrap();
    assert_eq!(env.state(), 0);
    assert_eq!(env.reset(), 1);
    assert_eq!(env.reset(), 2);
}

#[test]
fn reset_clears_last_action() {
    let mut env = DiscreteEnv::new(2, 1, two_state_table(), vec![1.0, 0.0]).unwrap();
    assert_eq!(env.last_action(), None);
    env.step(0);
    assert_eq!(env.last_action(), Some(0));
    assert_eq!(env.reset(), 0);
    assert_eq!(env.last_action(), None);
    assert_eq!(env.reset(), 0);
}

#[test]
fn declares_spaces() {
    let env = DiscreteEnv::new(2, 2, slippery_table(), vec![1.0, 0.0]).unwrap();
    assert_eq!(env.action_space().n, 2);
    assert_eq!(env.observation_space().n, 2);
    assert!(env.action_space().contains(1));
    assert!(!env.action_space().contains(2));
    assert_eq!(env.transitions(0, 0).len(), 2);
}

#[test]
fn same_seed_replays_same_trajectory() {
    let run = |seed: u64| {
        let mut env = DiscreteEnv::new(2, 2, slippery_table(), vec![0.5, 0.5]).unwrap();
        env.seed(seed);
        let mut trace = vec![env.reset()];
        for _ in 0..20 {
            let step = env.step(0);
            trace.push(step.next_state);
            if step.done {
                trace.push(env.reset());
            }
        }
        trace
    };
    assert_eq!(run(11), run(11));
}

#[test]
fn rejects_empty_spaces() {
    assert_eq!(
        DiscreteEnv::new(0, 1, Vec::new(), Vec::new()).err(),
        Some(MdpError::NoStates)
    );
    assert_eq!(
        DiscreteEnv::new(1, 0, vec![Vec::new()], vec![1.0]).err(),
        Some(MdpError::NoActions)
    );
}

#[test]
fn rejects_missing_action_row() {
    let mut table = slippery_table();
    table[1].pop();
    assert_eq!(
        DiscreteEnv::new(2, 2, table, vec![1.0, 0.0]).err(),
        Some(MdpError::ActionCountMismatch { state: 1, expected: 2, found: 1 })
    );
}

#[test]
fn rejects_missing_state_row() {
    let mut table = two_state_table();
    table.pop();
    assert_eq!(
        DiscreteEnv::new(2, 1, table, vec![1.0, 0.0]).err(),
        Some(MdpError::StateCountMismatch { expected: 2, found: 1 })
    );
}

#[test]
fn rejects_bad_probability_rows() {
    let mut table = two_state_table();
    table[0][0][0].probability = 0.9;
    assert!(matches!(
        DiscreteEnv::new(2, 1, table, vec![1.0, 0.0]),
        Err(MdpError::ProbabilitySum { state: 0, action: 0, .. })
    ));

    let mut table = two_state_table();
    table[1][0] = vec![
        Transition::new(-0.5, 0, 0.0, false),
        Transition::new(1.5, 1, 0.0, false),
    ];
    assert!(matches!(
        DiscreteEnv::new(2, 1, table, vec![1.0, 0.0]),
        Err(MdpError::NegativeProbability { state: 1, action: 0, .. })
    ));

    let mut table = two_state_table();
    table[0][0].clear();
    assert_eq!(
        DiscreteEnv::new(2, 1, table, vec![1.0, 0.0]).err(),
        Some(MdpError::EmptyTransition { state: 0, action: 0 })
    );
}

#[test]
fn rejects_out_of_range_next_state() {
    let mut table = two_state_table();
    table[0][0][0].next_state = 2;
    assert_eq!(
        DiscreteEnv::new(2, 1, table, vec![1.0, 0.0]).err(),
        Some(MdpError::NextStateOutOfRange {
            state: 0,
            action: 0,
            next_state: 2,
            n_states: 2,
        })
    );
}

#[test]
fn rejects_bad_initial_distribution() {
    assert_eq!(
        DiscreteEnv::new(2, 1, two_state_table(), vec![1.0]).err(),
        Some(MdpError::InitialDistributionLength { expected: 2, found: 1 })
    );
    assert!(matches!(
        DiscreteEnv::new(2, 1, two_state_table(), vec![0.5, 0.4]),
        Err(MdpError::InitialDistribution { .. })
    ));
    assert!(matches!(
        DiscreteEnv::new(2, 1, two_state_table(), vec![1.5, -0.5]),
        Err(MdpError::InitialDistribution { .. })
    ));
}

#[test]
fn tolerates_rounding_in_probability_rows() {
    let third = 1.0 / 3.0;
    let table = vec![vec![vec![
        Transition::new(third, 0, 0.0, false),
        Transition::new(third, 0, 1.0, false),
        Transition::new(third, 0, 2.0, false),
    ]]];
    let rng = ScriptedRng::new(&[0.0, 0.999_999_999_999]);
    let mut env = DiscreteEnv::with_rng(1, 1, table, vec![1.0], rng).unwrap();
    assert_eq!(env.step(0).reward, 2.0);
}

#[test]
#[should_panic]
fn stepping_an_undeclared_action_panics() {
    let mut env = DiscreteEnv::new(2, 1, two_state_table(), vec![1.0, 0.0]).unwrap();
    env.step(1);
}
