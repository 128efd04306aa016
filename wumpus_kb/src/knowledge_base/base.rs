//! Knowledge Base - the core inference structure.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use wumpus_rules::{Grid, Percept};

use super::{Bounds, Coord, Hints};
use crate::error::KbError;

/// Percepts that survived intersection for each unvisited room.
pub type IntersectMap = BTreeMap<Coord, BTreeSet<Percept>>;

/// Everything the player has sensed so far.
///
/// Only danger percepts (stench, breeze) are kept. Hints are recomputed from
/// the full observation set on every query, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    bounds: Bounds,

    /// Visited room -> danger percepts sensed there.
    observations: BTreeMap<Coord, BTreeSet<Percept>>,

    /// Once set, stench no longer produces hints.
    wumpus_dead: bool,
}

impl KnowledgeBase {
    /// Create an empty knowledge base for a space with the given per-axis sizes.
    pub fn new(dimensions: impl Into<Vec<usize>>) -> Self {
        Self {
            bounds: Bounds::new(dimensions),
            observations: BTreeMap::new(),
            wumpus_dead: false,
        }
    }

    /// Create an empty knowledge base sized for a grid.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            bounds: Bounds::of_grid(grid),
            observations: BTreeMap::new(),
            wumpus_dead: false,
        }
    }

    /// Record what was sensed in a room.
    ///
    /// Glitter and any other non-danger percept is dropped. Recording the
    /// same room again replaces the earlier observation.
    pub fn record_observation(
        &mut self,
        point: impl Into<Coord>,
        percepts: impl IntoIterator<Item = Percept>,
    ) -> Result<(), KbError> {
        let coord = point.into();
        self.bounds.check(&coord)?;

        let percepts: BTreeSet<Percept> =
            percepts.into_iter().filter(Percept::is_danger).collect();

        match self.observations.get(&coord) {
            Some(previous) if *previous != percepts => {
                log::warn!(
                    "observation at {} changed from {:?} to {:?}",
                    coord,
                    previous,
                    percepts
                );
            }
            Some(_) => {}
            None => log::debug!("observed {:?} at {}", percepts, coord),
        }

        self.observations.insert(coord, percepts);
        Ok(())
    }

    /// Mark the Wumpus as dead. Stench hints stop from here on.
    pub fn neutralize_hazard(&mut self) {
        if !self.wumpus_dead {
            log::info!("wumpus neutralized; dropping stench from hints");
        }
        self.wumpus_dead = true;
    }

    pub fn is_hazard_neutralized(&self) -> bool {
        self.wumpus_dead
    }

    /// All observations, keyed by visited room.
    pub fn observations(&self) -> &BTreeMap<Coord, BTreeSet<Percept>> {
        &self.observations
    }

    pub fn is_visited(&self, coord: &Coord) -> bool {
        self.observations.contains_key(coord)
    }

    /// Neighbours of a coordinate within the bounds.
    pub fn adjacent(&self, coord: &Coord) -> Result<BTreeSet<Coord>, KbError> {
        self.bounds.adjacent(coord)
    }

    /// Which percepts each unvisited room could still be the source of.
    ///
    /// An unvisited room can only be the source of a percept if every visited
    /// neighbour sensed that percept, so the candidates are the intersection
    /// of all visited neighbours' observations. Rooms left with nothing are
    /// omitted.
    pub fn intersect_map(&self) -> IntersectMap {
        let mut candidates = IntersectMap::new();

        for (visited, percepts) in &self.observations {
            for neighbour in self.bounds.neighbours(visited) {
                if self.is_visited(&neighbour) {
                    continue;
                }
                match candidates.get_mut(&neighbour) {
                    Some(current) => current.retain(|p| percepts.contains(p)),
                    None => {
                        candidates.insert(neighbour, percepts.clone());
                    }
                }
            }
        }

        candidates.retain(|_, percepts| !percepts.is_empty());
        candidates
    }

    /// Certain and possible hazard locations given every observation so far.
    ///
    /// # Panics
    ///
    /// Panics if a recorded percept has no possible source among the
    /// neighbours of the room it was sensed in. That cannot happen for
    /// observations taken from a real cave.
    pub fn hints(&self) -> Hints {
        let intersect = self.intersect_map();
        let mut hints = Hints::new();

        for (visited, percepts) in &self.observations {
            for &percept in percepts {
                if percept == Percept::Stench && self.wumpus_dead {
                    continue;
                }

                let sources: BTreeSet<Coord> = self
                    .bounds
                    .neighbours(visited)
                    .into_iter()
                    .filter(|n| intersect.get(n).is_some_and(|c| c.contains(&percept)))
                    .collect();

                assert!(
                    !sources.is_empty(),
                    "percept {:?} at {} must have a source",
                    percept,
                    visited
                );

                hints.add_sources(percept, sources);
            }
        }

        let hints = hints.settle();
        log::debug!(
            "hints: {} certain, {} maybe",
            hints.certain.values().map(BTreeSet::len).sum::<usize>(),
            hints.maybe.values().map(BTreeSet::len).sum::<usize>()
        );
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(list: &[(usize, usize)]) -> BTreeSet<Coord> {
        list.iter().map(|&c| Coord::from(c)).collect()
    }

    /// Pit at (2,0), Wumpus at (0,2).
    fn scenario_kb() -> KnowledgeBase {
        let mut kb = KnowledgeBase::new(vec![4, 4]);
        kb.record_observation((0, 0), []).unwrap();
        kb.record_observation((1, 0), [Percept::Breeze]).unwrap();
        kb.record_observation((0, 1), [Percept::Stench]).unwrap();
        kb
    }

    #[test]
    fn test_scenario_hints() {
        let hints = scenario_kb().hints();

        assert_eq!(hints.certain.get(&Percept::Breeze), Some(&set(&[(2, 0)])));
        assert_eq!(hints.certain.get(&Percept::Stench), Some(&set(&[(0, 2)])));
        assert!(hints.maybe.is_empty());
    }

    #[test]
    fn test_scenario_intersect_map() {
        let map = scenario_kb().intersect_map();

        // (1,1) touches both a breezy and a stinky room, so it is neither
        assert!(!map.contains_key(&Coord::from((1, 1))));
        assert_eq!(
            map.get(&Coord::from((2, 0))),
            Some(&BTreeSet::from([Percept::Breeze]))
        );
        assert_eq!(
            map.get(&Coord::from((0, 2))),
            Some(&BTreeSet::from([Percept::Stench]))
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_single_observation_gives_maybe() {
        let mut kb = KnowledgeBase::new(vec![4, 4]);
        kb.record_observation((1, 1), [Percept::Breeze]).unwrap();

        let hints = kb.hints();
        assert!(hints.certain.is_empty());
        assert_eq!(
            hints.maybe.get(&Percept::Breeze),
            Some(&set(&[(0, 1), (2, 1), (1, 0), (1, 2)]))
        );
    }

    #[test]
    fn test_certain_removed_from_maybe() {
        let mut kb = KnowledgeBase::new(vec![3, 3]);
        kb.record_observation((0, 0), [Percept::Breeze]).unwrap();
        kb.record_observation((0, 1), []).unwrap();
        kb.record_observation((1, 1), [Percept::Breeze]).unwrap();

        // (0,0) only has (1,0) left; (1,1) has (1,0), (2,1), (1,2)
        let hints = kb.hints();
        assert_eq!(hints.certain.get(&Percept::Breeze), Some(&set(&[(1, 0)])));
        assert_eq!(hints.maybe.get(&Percept::Breeze), Some(&set(&[(2, 1), (1, 2)])));
    }

    #[test]
    fn test_glitter_is_not_recorded() {
        let mut kb = KnowledgeBase::new(vec![2, 2]);
        kb.record_observation((0, 0), [Percept::Glitter]).unwrap();

        assert!(kb.observations()[&Coord::from((0, 0))].is_empty());
        assert!(kb.hints().is_empty());
    }

    #[test]
    fn test_recording_twice_is_idempotent() {
        let once = scenario_kb();
        let mut twice = scenario_kb();
        twice.record_observation((1, 0), [Percept::Breeze]).unwrap();

        assert_eq!(once.hints(), twice.hints());
        assert_eq!(once.observations(), twice.observations());
    }

    #[test]
    fn test_neutralize_drops_stench_hints() {
        let mut kb = scenario_kb();
        kb.neutralize_hazard();

        let hints = kb.hints();
        assert!(kb.is_hazard_neutralized());
        assert!(hints.certain.get(&Percept::Stench).is_none());
        assert!(hints.maybe.get(&Percept::Stench).is_none());
        assert_eq!(hints.certain.get(&Percept::Breeze), Some(&set(&[(2, 0)])));
    }

    #[test]
    fn test_neutralize_survives_new_observations() {
        let mut kb = scenario_kb();
        kb.neutralize_hazard();
        kb.record_observation((1, 2), [Percept::Stench]).unwrap();
        kb.record_observation((0, 2), []).unwrap();

        assert!(kb.hints().certain.get(&Percept::Stench).is_none());
        assert!(kb.hints().maybe.get(&Percept::Stench).is_none());
    }

    #[test]
    fn test_record_rejects_bad_points() {
        let mut kb = KnowledgeBase::new(vec![2, 2]);
        assert!(matches!(
            kb.record_observation((2, 0), []),
            Err(KbError::OutOfBounds { .. })
        ));
        assert!(matches!(
            kb.record_observation(Coord::new(vec![0, 0, 0]), []),
            Err(KbError::InvalidPoint { .. })
        ));
        assert!(kb.observations().is_empty());
    }

    #[test]
    #[should_panic(expected = "must have a source")]
    fn test_unsourced_percept_panics() {
        let mut kb = KnowledgeBase::new(vec![1, 2]);
        kb.record_observation((0, 0), [Percept::Breeze]).unwrap();
        kb.record_observation((0, 1), []).unwrap();
        let _ = kb.hints();
    }

    #[test]
    fn test_three_dimensional_inference() {
        let mut kb = KnowledgeBase::new(vec![2, 2, 2]);
        kb.record_observation(Coord::new(vec![0, 0, 0]), [Percept::Breeze])
            .unwrap();
        kb.record_observation(Coord::new(vec![1, 0, 0]), []).unwrap();
        kb.record_observation(Coord::new(vec![0, 1, 0]), []).unwrap();

        let hints = kb.hints();
        assert_eq!(
            hints.certain.get(&Percept::Breeze),
            Some(&BTreeSet::from([Coord::new(vec![0, 0, 1])]))
        );
    }
}
