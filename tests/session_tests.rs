use crossword::{generate, Direction, GuessOutcome, PuzzleSession, Selection, WordEntry};

fn wedding_session(saved: &[&str]) -> PuzzleSession {
    let entries: Vec<WordEntry> = [
        ("СВАДЬБА", "Главное событие дня"),
        ("БУКЕТ", "Цветы в руках невесты"),
        ("ТАНЕЦ", "Развлечение на празднике"),
    ]
    .iter()
    .map(|(w, c)| WordEntry::new(w, c).unwrap())
    .collect();
    PuzzleSession::initialize(generate(&entries), saved.iter().copied())
}

#[test]
fn test_lowercase_guess_solves_once() {
    let mut session = wedding_session(&[]);
    let word = session.grid().words()[0].clone();
    assert_eq!(word.word(), "СВАДЬБА");

    let first = session.submit_guess(&word, "свадьба");
    assert_eq!(
        first,
        GuessOutcome {
            correct: true,
            already_solved: false
        }
    );
    assert!(first.is_new_solve());
    assert_eq!(session.score(), 1);

    let second = session.submit_guess(&word, "свадьба");
    assert_eq!(
        second,
        GuessOutcome {
            correct: true,
            already_solved: true
        }
    );
    assert!(!second.is_new_solve());
    assert_eq!(session.score(), 1);
}

#[test]
fn test_wrong_and_partial_guesses_leave_state_untouched() {
    let mut session = wedding_session(&[]);
    let word = session.grid().words()[1].clone();
    for candidate in ["БУК", "", "БУКЕТЫ", "ТАНЕЦ", "БУКЕТ "] {
        for _ in 0..3 {
            assert_eq!(session.submit_guess(&word, candidate), GuessOutcome::WRONG);
        }
    }
    assert_eq!(session.score(), 0);
    assert!(!session.is_solved(&word));

    assert!(session.submit_guess(&word, "БуКеТ").is_new_solve());
    assert!(session.is_solved(&word));
}

#[test]
fn test_already_solved_wins_over_wrong_candidate() {
    let mut session = wedding_session(&["БУКЕТ"]);
    let word = session.grid().words()[1].clone();
    assert_eq!(
        session.submit_guess(&word, "нечто"),
        GuessOutcome {
            correct: true,
            already_solved: true
        }
    );
    assert_eq!(session.score(), 1);
}

#[test]
fn test_restore_ignores_stale_words() {
    let session = wedding_session(&["букет", "ФАТА", "ТАНЕЦ", "ТАНЕЦ"]);
    assert_eq!(session.score(), 2);
    assert!(session.state().contains("БУКЕТ"));
    assert!(session.state().contains("танец"));
    assert!(!session.state().contains("ФАТА"));
    assert_eq!(session.state().snapshot(), vec!["БУКЕТ", "ТАНЕЦ"]);
}

#[test]
fn test_submit_by_number() {
    let mut session = wedding_session(&[]);
    assert_eq!(session.submit_by_number(9, "ТОРТ"), None);
    assert_eq!(session.submit_by_number(3, "тАнЕц").map(|o| o.is_new_solve()), Some(true));
    assert_eq!(session.submit_by_number(3, "танец").map(|o| o.already_solved), Some(true));
    assert_eq!(session.score(), 1);
}

#[test]
fn test_completion() {
    let mut session = wedding_session(&[]);
    assert_eq!(session.total_words(), 3);
    for (number, answer) in [(1, "свадьба"), (2, "букет")] {
        session.submit_by_number(number, answer);
        assert!(!session.is_complete());
    }
    session.submit_by_number(3, "танец");
    assert!(session.is_complete());
}

#[test]
fn test_empty_grid_session() {
    let session = PuzzleSession::initialize(generate(&[]), ["СВАДЬБА"]);
    assert_eq!(session.score(), 0);
    assert_eq!(session.total_words(), 0);
    assert!(!session.is_complete());
    assert!(session.select_word(6, 6).is_none());
}

#[test]
fn test_select_word_at_intersection() {
    let session = wedding_session(&[]);
    assert_eq!(session.select_word(6, 7).unwrap().word(), "СВАДЬБА");
    assert_eq!(
        session.select_word_in(6, 7, Direction::Down).unwrap().word(),
        "БУКЕТ"
    );
    assert_eq!(session.select_word(9, 7).unwrap().word(), "БУКЕТ");
    let both: Vec<_> = session.words_at(6, 4).map(|w| w.number()).collect();
    assert_eq!(both, vec![1, 3]);
    assert!(session.select_word(0, 0).is_none());
}

#[test]
fn test_view_reveals_only_solved_words() {
    let mut session = wedding_session(&[]);
    let view = session.view(None);
    let cell = view.cell(6, 2).unwrap();
    assert!(cell.filled);
    assert_eq!(cell.letter, None);
    assert_eq!(cell.number, Some(1));
    assert!(!view.cell(0, 0).unwrap().filled);
    assert!(view.cell(12, 0).is_none());

    session.submit_by_number(2, "букет");
    let view = session.view(None);
    // intersection with the unsolved across word shows the solved letter
    assert_eq!(view.cell(6, 7).unwrap().letter, Some('Б'));
    assert!(view.cell(6, 7).unwrap().correct);
    assert_eq!(view.cell(10, 7).unwrap().letter, Some('Т'));
    assert_eq!(view.cell(6, 6).unwrap().letter, None);
    assert!(!view.cell(6, 6).unwrap().correct);
}

#[test]
fn test_view_tracks_selection() {
    let session = wedding_session(&[]);
    let view = session.view(Some(Selection {
        row: 7,
        col: 4,
        number: 3,
    }));
    assert!(view.cell(7, 4).unwrap().selected);
    assert!(!view.cell(5, 4).unwrap().selected);
    for row in 5..10 {
        assert!(view.cell(row, 4).unwrap().in_active_word);
    }
    assert!(!view.cell(6, 5).unwrap().in_active_word);
}
