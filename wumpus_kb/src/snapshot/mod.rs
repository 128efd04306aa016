//! Snapshot - a serializable picture of the knowledge base.
//!
//! Coordinates are keyed by their display form, e.g. `"(2, 0)"`, so the
//! exported JSON has plain string keys. Hazards are keyed by their label.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use wumpus_rules::Percept;

use crate::error::KbError;
use crate::knowledge_base::{Coord, KnowledgeBase};
use crate::session::SessionId;

/// Display name of the hazard a danger percept points at.
///
/// The label depends on whether the Wumpus has been shot; nothing global is
/// rewritten when it dies.
pub fn hazard_label(percept: Percept, wumpus_dead: bool) -> &'static str {
    match percept {
        Percept::Stench if wumpus_dead => "dead Wumpus",
        Percept::Stench => "Wumpus",
        Percept::Breeze => "Pit",
        Percept::Glitter => "Gold",
    }
}

/// Everything the knowledge base knows at one point in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeSnapshot {
    pub session: SessionId,

    /// Visited room -> danger percepts sensed there.
    pub observations: BTreeMap<String, BTreeSet<Percept>>,

    /// Hazard label -> rooms that must hold it.
    pub known_locations: BTreeMap<String, Vec<String>>,

    /// Hazard label -> rooms that might hold it.
    pub possible_locations: BTreeMap<String, Vec<String>>,

    /// Unvisited room -> percepts it could still be the source of.
    pub intersect_map: BTreeMap<String, BTreeSet<Percept>>,

    pub wumpus_dead: bool,
}

impl KnowledgeSnapshot {
    /// Capture the current state of a knowledge base.
    pub fn capture(session: SessionId, kb: &KnowledgeBase) -> Self {
        let wumpus_dead = kb.is_hazard_neutralized();
        let hints = kb.hints();

        Self {
            session,
            observations: stringify_keys(kb.observations()),
            known_locations: by_label(&hints.certain, wumpus_dead),
            possible_locations: by_label(&hints.maybe, wumpus_dead),
            intersect_map: stringify_keys(&kb.intersect_map()),
            wumpus_dead,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, KbError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot previously rendered by [`to_json`](Self::to_json).
    pub fn from_json(text: &str) -> Result<Self, KbError> {
        Ok(serde_json::from_str(text)?)
    }
}

fn stringify_keys(
    map: &BTreeMap<Coord, BTreeSet<Percept>>,
) -> BTreeMap<String, BTreeSet<Percept>> {
    map.iter()
        .map(|(coord, percepts)| (coord.to_string(), percepts.clone()))
        .collect()
}

fn by_label(
    map: &BTreeMap<Percept, BTreeSet<Coord>>,
    wumpus_dead: bool,
) -> BTreeMap<String, Vec<String>> {
    map.iter()
        .map(|(percept, coords)| {
            (
                hazard_label(*percept, wumpus_dead).to_string(),
                coords.iter().map(Coord::to_string).collect(),
            )
        })
        .collect()
}
