#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use scenario::{GridDef, Scenario};
use std::path::PathBuf;
use tracing::Level;

/// Roll out random-policy episodes against a discrete MDP.
#[derive(Parser)]
#[command(name = "mdp_rollout")]
struct Args {
    /// JSON scenario file; the default 10x10 grid world when omitted.
    #[arg(long)]
    scenario: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    episodes: usize,

    /// Step cap per episode.
    #[arg(long, default_value_t = 1000)]
    max_steps: usize,

    /// Seeds both the environment and the policy.
    #[arg(long)]
    seed: Option<u64>,

    /// Log every transition.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::TRACE } else { Level::INFO })
        .init();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::Grid(GridDef::default()),
    };
    tracing::info!("Loaded scenario: {}", scenario.describe());

    let mut env = scenario.into_env(args.seed)?;
    let mut policy = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed.wrapping_add(1)),
        None => fastrand::Rng::new(),
    };

    let summaries = runtime::run_episodes(env.as_mut(), &mut policy, args.episodes, args.max_steps);

    let finished = summaries.iter().filter(|s| s.finished).count();
    #[allow(clippy::cast_precision_loss)]
    let mean_return =
        summaries.iter().map(|s| s.total_reward).sum::<f64>() / summaries.len().max(1) as f64;
    tracing::info!(
        "Finished {finished}/{} episodes, mean return {mean_return:.3}",
        summaries.len()
    );
    if finished < summaries.len() {
        tracing::warn!(
            "{} episodes hit the {}-step cap",
            summaries.len() - finished,
            args.max_steps
        );
    }
    Ok(())
}
