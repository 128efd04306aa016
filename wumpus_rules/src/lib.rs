//! # Wumpus Rules
//!
//! The rules crate for Wumpus World - the cave grid, what a player senses in
//! each room, and the turn-based state machine that moves them around.
//! This crate holds no knowledge about what the player has deduced; that
//! lives in `wumpus_kb`.

pub mod config;
mod error;
pub mod game_state;
pub mod grid;
pub mod level;
pub mod percepts;

pub use config::*;
pub use error::*;
pub use game_state::*;
pub use grid::*;
pub use level::*;
pub use percepts::*;
