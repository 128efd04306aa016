//! Percepts - what the player senses in a room.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::RulesError;
use crate::grid::{Grid, Marker, Point};

/// A sensory signal available in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Percept {
    /// The Wumpus is in a neighbouring room.
    Stench,
    /// A pit is in a neighbouring room.
    Breeze,
    /// Gold is in this room.
    Glitter,
}

impl Percept {
    /// Stench and breeze point at hazards; glitter does not.
    pub fn is_danger(&self) -> bool {
        matches!(self, Percept::Stench | Percept::Breeze)
    }

    /// The marker that produces this percept.
    pub fn source(&self) -> Marker {
        match self {
            Percept::Stench => Marker::Wumpus,
            Percept::Breeze => Marker::Pit,
            Percept::Glitter => Marker::Gold,
        }
    }
}

/// Every percept sensed at `point`.
pub fn percepts_at(grid: &Grid, point: Point) -> Result<BTreeSet<Percept>, RulesError> {
    let here = grid.value_at(point)?;
    let mut percepts = BTreeSet::new();

    for marker in grid.adjacent_values(point) {
        match marker {
            Marker::Wumpus => {
                percepts.insert(Percept::Stench);
            }
            Marker::Pit => {
                percepts.insert(Percept::Breeze);
            }
            _ => {}
        }
    }

    // Glitter is sensed in the room itself, not from its neighbours
    if here == Marker::Gold {
        percepts.insert(Percept::Glitter);
    }

    Ok(percepts)
}

/// Only the hazard-indicating percepts at `point`.
pub fn danger_percepts_at(grid: &Grid, point: Point) -> Result<BTreeSet<Percept>, RulesError> {
    Ok(percepts_at(grid, point)?
        .into_iter()
        .filter(Percept::is_danger)
        .collect())
}
