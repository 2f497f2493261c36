use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdp::{DiscreteEnv, Env, GridConfig, GridWorld, Transition};

fn bench_grid_step(c: &mut Criterion) {
    let mut env = GridWorld::new(GridConfig::default()).unwrap();
    env.seed(0);
    env.reset();
    let mut action = 0;
    c.bench_function("grid_step", |b| {
        b.iter(|| {
            let step = env.step(black_box(action));
            action = (action + 1) % 4;
            if step.done {
                env.reset();
            }
            step
        });
    });
}

fn bench_table_step(c: &mut Criterion) {
    // ring of 64 states where each action either advances or stays put
    let n = 64;
    let table = (0..n)
        .map(|s| {
            vec![
                vec![
                    Transition::new(0.8, (s + 1) % n, 1.0, false),
                    Transition::new(0.2, s, 0.0, false),
                ],
                vec![Transition::new(1.0, s, 0.0, false)],
            ]
        })
        .collect();
    let mut isd = vec![0.0; n];
    isd[0] = 1.0;
    let mut env = DiscreteEnv::new(n, 2, table, isd).unwrap();
    env.seed(0);
    c.bench_function("table_step", |b| {
        b.iter(|| env.step(black_box(0)));
    });
}

criterion_group!(benches, bench_grid_step, bench_table_step);
criterion_main!(benches);
