/// Side length of the square crossword grid.
pub const GRID_SIZE: usize = 12;

/// Points reported to the score aggregator for every newly solved word.
pub const POINTS_PER_WORD: i64 = 1;

/// Solved words that make up one cross-game leaderboard point.
pub const WORDS_PER_LEADERBOARD_POINT: u32 = 5;

/// Word set served for the first puzzle when nothing else is configured.
pub const DEFAULT_WORDS: [(&str, &str); 8] = [
    ("СВАДЬБА", "Главное событие дня"),
    ("ТАМАДА", "Ведущий праздника"),
    ("ФАТА", "Головной убор невесты"),
    ("БУКЕТ", "Цветы в руках невесты"),
    ("КОЛЬЦО", "Символ брака"),
    ("ТОРТ", "Сладкое угощение"),
    ("ТОСТ", "Поздравление гостей"),
    ("ТАНЕЦ", "Развлечение на празднике"),
];
