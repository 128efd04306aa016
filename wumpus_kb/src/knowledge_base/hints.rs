//! Hints - hazard locations derived from the observations.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use wumpus_rules::Percept;

use super::Coord;

/// Hazard locations per danger percept, split by confidence.
///
/// A coordinate never appears in both `certain` and `maybe` for the same
/// percept, and percepts with no locations are left out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hints {
    /// Rooms that must hold the hazard behind the percept.
    pub certain: BTreeMap<Percept, BTreeSet<Coord>>,
    /// Rooms that might hold it.
    pub maybe: BTreeMap<Percept, BTreeSet<Coord>>,
}

impl Hints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.certain.is_empty() && self.maybe.is_empty()
    }

    /// Certain locations for a percept.
    pub fn certain_for(&self, percept: Percept) -> impl Iterator<Item = &Coord> {
        self.certain.get(&percept).into_iter().flatten()
    }

    /// Possible locations for a percept.
    pub fn maybe_for(&self, percept: Percept) -> impl Iterator<Item = &Coord> {
        self.maybe.get(&percept).into_iter().flatten()
    }

    /// Record the candidate sources found for one sensed percept.
    pub(crate) fn add_sources(&mut self, percept: Percept, sources: BTreeSet<Coord>) {
        let target = if sources.len() == 1 {
            &mut self.certain
        } else {
            &mut self.maybe
        };
        target.entry(percept).or_default().extend(sources);
    }

    /// Drop certain locations from `maybe`, then drop empty entries.
    pub(crate) fn settle(mut self) -> Self {
        for (percept, certain) in &self.certain {
            if let Some(maybe) = self.maybe.get_mut(percept) {
                maybe.retain(|coord| !certain.contains(coord));
            }
        }
        self.maybe.retain(|_, coords| !coords.is_empty());
        self.certain.retain(|_, coords| !coords.is_empty());
        self
    }
}
