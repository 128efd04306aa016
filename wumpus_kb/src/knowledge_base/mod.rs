//! Knowledge Base module - what the player has sensed and what follows from it.
//!
//! The knowledge base consists of:
//! - **Coords**: Dimension-generic room coordinates and their adjacency
//! - **Observations**: The danger percepts recorded in each visited room
//! - **Hints**: Certain and possible hazard locations derived from observations

mod base;
mod coord;
mod hints;

pub use base::*;
pub use coord::*;
pub use hints::*;
