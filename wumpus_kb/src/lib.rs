//! # Wumpus Knowledge Base
//!
//! What the player has learned about the cave. This crate interfaces with
//! `wumpus_rules`, records the percepts sensed in each visited room, and
//! deduces where the hazards must or might be.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Observations and the intersection-based hazard inference
//! - **snapshot**: Serializable export of everything the knowledge base knows
//! - **session**: One game - grid, player state and knowledge kept in step
//!
//! ## Design Philosophy
//!
//! - **Sound**: A certain hint is never wrong for observations taken from a real cave
//! - **Recomputed**: Hints are derived fresh from the observations on every query
//! - **No I/O**: Reading levels and writing snapshots is left to the front end

mod error;
pub mod knowledge_base;
pub mod session;
pub mod snapshot;

pub use error::*;
pub use knowledge_base::*;
pub use session::*;
pub use snapshot::*;
