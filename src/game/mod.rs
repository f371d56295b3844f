// Public API
pub use errors::GameError;
pub use player::{parse_players, ColonPolicy, Player, Score};
pub use resolver::resolve_winner;
pub use result::WinnerResult;

// Internal modules
mod errors;
mod player;
mod resolver;
mod result;
