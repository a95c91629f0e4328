// Library exports for the pursuit minimax engine
// The driver binary and the replay/analysis tools all build on these modules

pub mod analysis;
pub mod config;
pub mod debug_logger;
pub mod error;
pub mod eval;
pub mod game;
pub mod grid;
pub mod replay;
pub mod search;
pub mod state;
pub mod types;

pub use error::PursuitError;
pub use grid::Grid;
pub use search::{choose_move, SearchEngine, SearchOutcome};
pub use state::{is_terminal, GameState};
pub use types::{Mover, Outcome, Position};
