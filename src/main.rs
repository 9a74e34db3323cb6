#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use crossword::{
    init_logging,
    prelude::*,
    render::{format_clues, format_solution},
    unplaced, CliSolver, RuntimeConfig,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Store file (JSON, or bincode with a .bin extension). Overrides CROSSWORD_STORE.
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Solve a puzzle in the terminal, or let a bot solve it.
    Play {
        #[arg(long, help = "Telegram user id of the guest")]
        player: u64,
        #[arg(long, help = "Puzzle to open instead of the guest's current one")]
        puzzle: Option<u32>,
        #[arg(long, help = "Let an automated guest answer instead of reading stdin")]
        bot: bool,
        #[arg(long, default_value_t = 0.7, help = "Probability that the bot answers correctly")]
        accuracy: f64,
        #[arg(long, help = "Fix RNG seed for reproducible bot runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Print the generated layout of a puzzle with all answers.
    Layout {
        #[arg(long, default_value_t = 0)]
        puzzle: u32,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut config = RuntimeConfig::from_env()?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    let store = Arc::new(FileStore::open(&config.store_path));

    match cli.command {
        Commands::Play {
            player,
            puzzle,
            bot,
            accuracy,
            seed,
        } => {
            let player = PlayerId(player);
            let mut session = match puzzle {
                Some(puzzle) => {
                    PlayerSession::start(
                        SessionContext::new(player, puzzle),
                        &*store,
                        store.clone(),
                        store.clone(),
                        config.debounce,
                    )
                    .await?
                }
                None => {
                    PlayerSession::resume(
                        player,
                        &*store,
                        store.clone(),
                        store.clone(),
                        config.debounce,
                    )
                    .await?
                }
            };
            let context = session.context();
            if session.session().total_words() == 0 {
                println!("Puzzle {} is not ready yet", context.puzzle);
                return Ok(());
            }

            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            if bot {
                let mut solver = BotSolver::new(accuracy);
                session.run(&mut solver, &mut rng).await?;
            } else {
                let mut solver = CliSolver::new();
                session.run(&mut solver, &mut rng).await?;
            }

            let summary = session.finish().await;
            let points = store
                .leaderboard_points(context.player, config.words_per_point)
                .await?;
            println!(
                "Solved {}/{} words of puzzle {} in {} guesses ({} leaderboard points)",
                summary.solved, summary.total, summary.puzzle, summary.guesses, points
            );
            let next = store.current_puzzle(context.player).await?;
            if next != context.puzzle {
                println!("Next time: puzzle {}", next);
            }
        }
        Commands::Layout { puzzle } => {
            let entries = store.load_words(puzzle).await?;
            let grid = generate(&entries);
            let session = PuzzleSession::initialize(grid, Vec::<String>::new());
            print!("{}", format_solution(session.grid()));
            println!();
            print!("{}", format_clues(&session));
            for entry in unplaced(&entries, session.grid()) {
                println!("not placed: {}", entry.word());
            }
        }
    }
    Ok(())
}
