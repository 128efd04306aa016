//! Error types for the knowledge crate.

use thiserror::Error;
use wumpus_rules::RulesError;

use crate::knowledge_base::Coord;

/// Errors raised by the knowledge base and the session around it.
#[derive(Debug, Error)]
pub enum KbError {
    /// A coordinate has the wrong number of axes for the knowledge base.
    #[error("invalid point {found}: expected {expected} dimensions")]
    InvalidPoint { expected: usize, found: Coord },

    /// A coordinate lies outside the known bounds.
    #[error("point {coord} is out of bounds")]
    OutOfBounds { coord: Coord },

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("failed to serialize snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
