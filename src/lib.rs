// Library crate for the hand scoring CLI
// This file exposes the public API for the binary and integration tests

pub mod app;
pub mod cards;
pub mod cli;
pub mod game;
pub mod io;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::{report_failure, run, Settings};
pub use cards::{Card, CardError, Rank, Suit};
pub use game::{
    parse_players, resolve_winner, ColonPolicy, GameError, Player, Score, WinnerResult,
};
pub use io::OutputMode;
pub use shared::AppError;
