#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};

/// Variable holding the log level filter, e.g. `debug` or `off`.
const LEVEL_VAR: &str = "CROSSWORD_LOG";

/// Writes `LEVEL target: message` lines to stderr so stdout stays free for
/// grids and JSON.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level filter for a raw `CROSSWORD_LOG` value; `info` when unset or unknown.
fn level_filter(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Safe to call more than once.
pub fn init_logging() {
    let level = level_filter(std::env::var(LEVEL_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
