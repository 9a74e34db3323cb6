use std::sync::Arc;

use crossword::{
    init_logging, BotSolver, InMemoryStore, PlayerId, PlayerSession, SessionContext, WordSource,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tokio::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [accuracy]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let accuracy: f64 = match args.get(2) {
        Some(a) => a.parse()?,
        None => 0.7,
    };

    let store = Arc::new(InMemoryStore::new());
    let context = SessionContext::new(PlayerId(seed), 0);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut solver = BotSolver::new(accuracy);

    let mut session = PlayerSession::start(
        context,
        &*store,
        store.clone(),
        store.clone(),
        Duration::from_millis(10),
    )
    .await?;
    session.run(&mut solver, &mut rng).await?;
    let summary = session.finish().await;
    let next_puzzle = store.current_puzzle(context.player).await?;

    let result = json!({
        "solved": summary.solved,
        "total": summary.total,
        "guesses": summary.guesses,
        "saved": store.progress(context.player, context.puzzle).unwrap_or_default(),
        "complete": summary.solved == summary.total,
        "points": store.raw_points(context.player),
        "next_puzzle": next_puzzle,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
