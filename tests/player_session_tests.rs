use std::sync::Arc;

use crossword::{
    BotSolver, InMemoryStore, PlayerId, PlayerSession, ScoreAggregator, SessionContext,
    WordEntry, WordSource,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::{sleep, Duration};

/// Aggregator that takes a while before forwarding to the store.
struct SlowAggregator {
    store: InMemoryStore,
    delay: Duration,
}

#[async_trait::async_trait]
impl ScoreAggregator for SlowAggregator {
    async fn add_points(&self, player: PlayerId, delta: i64) -> anyhow::Result<()> {
        sleep(self.delay).await;
        self.store.add_points(player, delta).await
    }
}

const PUZZLE: u32 = 1;

fn wedding_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    let entries = [
        ("СВАДЬБА", "Главное событие дня"),
        ("БУКЕТ", "Цветы в руках невесты"),
        ("ТАНЕЦ", "Развлечение на празднике"),
    ]
    .iter()
    .map(|(w, c)| WordEntry::new(w, c).unwrap())
    .collect();
    store.set_puzzle(PUZZLE, entries);
    store
}

async fn start(store: &InMemoryStore, player: u64) -> PlayerSession {
    let shared = Arc::new(store.clone());
    PlayerSession::start(
        SessionContext::new(PlayerId(player), PUZZLE),
        store,
        shared.clone(),
        shared,
        Duration::from_millis(5),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_new_solve_is_persisted_and_scored() {
    let store = wedding_store();
    let mut session = start(&store, 1).await;

    let outcome = session.submit(2, "букет").unwrap();
    assert!(outcome.is_new_solve());
    let again = session.submit(2, "БУКЕТ").unwrap();
    assert!(again.already_solved);
    assert!(!session.submit(3, "танго").unwrap().correct);
    assert_eq!(session.guess_count(), 3);

    let summary = session.finish().await;
    assert_eq!(summary.solved, 1);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.guesses, 3);

    assert_eq!(store.progress(PlayerId(1), PUZZLE), Some(vec!["БУКЕТ".to_string()]));
    assert_eq!(store.raw_points(PlayerId(1)), 1);
}

#[tokio::test]
async fn test_unknown_number_is_not_counted() {
    let store = wedding_store();
    let mut session = start(&store, 2).await;
    assert_eq!(session.submit(7, "торт"), None);
    assert_eq!(session.guess_count(), 0);
    let summary = session.finish().await;
    assert_eq!(summary.solved, 0);
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_resume_ignores_stale_progress() {
    let store = wedding_store();
    store.set_progress(
        PlayerId(3),
        PUZZLE,
        vec!["букет".to_string(), "ГОСТЬ".to_string()],
    );
    let mut session = start(&store, 3).await;
    assert_eq!(session.session().score(), 1);
    assert!(session.submit(2, "букет").unwrap().already_solved);

    session.submit(1, "свадьба");
    session.finish().await;
    assert_eq!(
        store.progress(PlayerId(3), PUZZLE),
        Some(vec!["БУКЕТ".to_string(), "СВАДЬБА".to_string()])
    );
}

#[tokio::test]
async fn test_accurate_bot_solves_everything() {
    let store = InMemoryStore::new();
    let mut session = PlayerSession::start(
        SessionContext::new(PlayerId(4), 0),
        &store,
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Duration::from_millis(5),
    )
    .await
    .unwrap();
    let total = session.session().total_words();
    assert!(total > 1);

    let mut rng = SmallRng::seed_from_u64(4);
    let mut bot = BotSolver::new(1.0);
    session.run(&mut bot, &mut rng).await.unwrap();
    assert!(session.session().is_complete());
    let summary = session.finish().await;
    assert_eq!(summary.guesses, total);

    assert_eq!(store.raw_points(PlayerId(4)), total as i64);
    assert_eq!(store.progress(PlayerId(4), 0).map(|w| w.len()), Some(total));
}

#[tokio::test]
async fn test_hopeless_bot_gives_up() {
    let store = wedding_store();
    let mut session = start(&store, 5).await;
    let mut rng = SmallRng::seed_from_u64(5);
    let mut bot = BotSolver::with_patience(0.0, 10);
    session.run(&mut bot, &mut rng).await.unwrap();
    let summary = session.finish().await;
    assert_eq!(summary.guesses, 10);
    assert_eq!(summary.solved, 0);
}

#[tokio::test]
async fn test_sink_failure_keeps_session_going() {
    let store = wedding_store();
    store.set_fail_writes(true);
    let mut session = start(&store, 6).await;
    assert!(session.submit(3, "танец").unwrap().is_new_solve());
    assert!(session.submit(1, "свадьба").unwrap().is_new_solve());
    assert_eq!(session.session().score(), 2);

    let summary = session.finish().await;
    assert_eq!(summary.solved, 2);
    assert_eq!(store.save_count(), 0);
    assert_eq!(store.raw_points(PlayerId(6)), 0);
}

#[tokio::test]
async fn test_finish_waits_for_slow_point_reports() {
    let store = wedding_store();
    let aggregator = Arc::new(SlowAggregator {
        store: store.clone(),
        delay: Duration::from_millis(50),
    });
    let mut session = PlayerSession::start(
        SessionContext::new(PlayerId(7), PUZZLE),
        &store,
        Arc::new(store.clone()),
        aggregator,
        Duration::from_millis(5),
    )
    .await
    .unwrap();

    assert!(session.submit(3, "танец").unwrap().is_new_solve());
    assert!(session.submit(2, "букет").unwrap().is_new_solve());
    assert_eq!(store.raw_points(PlayerId(7)), 0);

    let summary = session.finish().await;
    assert_eq!(summary.solved, 2);
    assert_eq!(store.raw_points(PlayerId(7)), 2);
}

#[tokio::test]
async fn test_completing_a_puzzle_moves_to_the_next() {
    let store = wedding_store();
    let mut session = start(&store, 8).await;
    for (number, answer) in [(1, "свадьба"), (2, "букет")] {
        session.submit(number, answer);
    }
    assert!(!session.session().is_complete());
    session.submit(3, "танец");
    assert!(session.session().is_complete());
    session.finish().await;

    assert_eq!(store.current_puzzle(PlayerId(8)).await.unwrap(), PUZZLE + 1);
}

#[tokio::test]
async fn test_resume_opens_the_current_puzzle() {
    let store = wedding_store();
    let player = PlayerId(9);
    assert_eq!(store.current_puzzle(player).await.unwrap(), 0);

    store.set_progress(player, PUZZLE, vec!["БУКЕТ".to_string()]);
    store.set_current(player, PUZZLE);
    let shared = Arc::new(store.clone());
    let session = PlayerSession::resume(
        player,
        &store,
        shared.clone(),
        shared,
        Duration::from_millis(5),
    )
    .await
    .unwrap();
    assert_eq!(session.context().puzzle, PUZZLE);
    assert_eq!(session.session().total_words(), 3);
    assert_eq!(session.session().score(), 1);
    session.finish().await;
}

#[tokio::test]
async fn test_replaying_an_old_puzzle_keeps_the_current_one() {
    let store = wedding_store();
    let player = PlayerId(10);
    store.set_current(player, 4);

    let mut session = start(&store, 10).await;
    for (number, answer) in [(1, "свадьба"), (2, "букет"), (3, "танец")] {
        session.submit(number, answer);
    }
    assert!(session.session().is_complete());
    session.finish().await;

    assert_eq!(store.current_puzzle(player).await.unwrap(), 4);
    assert_eq!(store.progress(player, PUZZLE).map(|w| w.len()), Some(3));
}
