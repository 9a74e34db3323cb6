#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
pub mod prelude;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod domain;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
#[cfg(feature = "std")]
pub mod player_session;
#[cfg(feature = "std")]
pub mod progress;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
pub mod store;

pub use engine::*;
#[cfg(feature = "std")]
pub use config::RuntimeConfig;
#[cfg(feature = "std")]
pub use domain::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::{BotSolver, CliSolver, Guess, Solver};
#[cfg(feature = "std")]
pub use player_session::PlayerSession;
#[cfg(feature = "std")]
pub use progress::ProgressWriter;
#[cfg(feature = "std")]
pub use protocol::{ProgressSink, ScoreAggregator, WordSource};
#[cfg(feature = "std")]
pub use store::{file::FileStore, in_memory::InMemoryStore};
