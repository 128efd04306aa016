//! Session - one game, keeping the grid, player and knowledge in step.
//!
//! Each turn runs in a fixed order:
//! 1. **Observe**: Sense the current room and record it in the knowledge base
//! 2. **Hint**: Derive hazard hints from every observation so far
//! 3. **Act**: Apply the player's command to get the next game state

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;
use wumpus_rules::{
    percepts_at, Command, GameState, Grid, Outcome, Percept, RulesConfig, Transition,
};

use crate::error::KbError;
use crate::knowledge_base::{Hints, KnowledgeBase};
use crate::snapshot::KnowledgeSnapshot;

/// Unique identifier for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil session ID (useful for tests).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the player learns at the start of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Everything sensed in the current room, glitter included.
    pub percepts: BTreeSet<Percept>,
    pub hints: Hints,
}

/// A single game from start to death or victory.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    grid: Grid,
    state: GameState,
    knowledge: KnowledgeBase,
}

impl Session {
    /// Start a new session on a grid.
    pub fn new(grid: Grid, config: &RulesConfig) -> Result<Self, KbError> {
        config.validate(&grid)?;

        let id = SessionId::new();
        log::debug!(
            "session {} starting at {} on a {:?} grid",
            id,
            config.start,
            grid.dimensions()
        );

        Ok(Self {
            id,
            knowledge: KnowledgeBase::for_grid(&grid),
            state: GameState::new(config),
            grid,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Sense the current room, record it, and report the resulting hints.
    pub fn observe(&mut self) -> Result<TurnReport, KbError> {
        let location = self.state.location;
        let percepts = percepts_at(&self.grid, location)?;
        self.knowledge
            .record_observation(location, percepts.iter().copied())?;

        Ok(TurnReport {
            percepts,
            hints: self.knowledge.hints(),
        })
    }

    /// Apply a player command.
    ///
    /// A hit with the arrow also neutralizes the Wumpus in the knowledge base.
    pub fn apply(&mut self, command: Command) -> Transition {
        let transition = self.state.apply(&self.grid, command);
        if transition.outcome == Outcome::ArrowHit {
            self.knowledge.neutralize_hazard();
        }
        self.state = transition.state;
        transition
    }

    /// Capture the knowledge base for export.
    pub fn snapshot(&self) -> KnowledgeSnapshot {
        KnowledgeSnapshot::capture(self.id, &self.knowledge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_base::Coord;
    use wumpus_rules::{parse_level, Marker, Orientation, Point, RulesError, Status};

    /// Pit at (2,0), Wumpus at (0,2), gold at (3,3).
    const LEVEL: &str = "\
-, -, -, G
W, -, -, -
-, -, -, -
-, -, P, -";

    fn session() -> Session {
        Session::new(parse_level(LEVEL).unwrap(), &RulesConfig::default()).unwrap()
    }

    #[test]
    fn test_level_matches_scenario() {
        let session = session();
        let grid = session.grid();
        assert_eq!(grid.find(Marker::Pit).collect::<Vec<_>>(), vec![Point::new(2, 0)]);
        assert_eq!(grid.find(Marker::Wumpus).collect::<Vec<_>>(), vec![Point::new(0, 2)]);
        assert_eq!(grid.find(Marker::Gold).collect::<Vec<_>>(), vec![Point::new(3, 3)]);
    }

    #[test]
    fn test_start_outside_grid_is_rejected() {
        let config = RulesConfig {
            start: Point::new(9, 9),
            ..Default::default()
        };
        let result = Session::new(parse_level(LEVEL).unwrap(), &config);
        assert!(matches!(
            result,
            Err(KbError::Rules(RulesError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_start_on_pit_is_rejected() {
        // start room (0,0) is the pit, with (1,0) breezy next to it
        let result = Session::new(parse_level("P, -").unwrap(), &RulesConfig::default());
        assert!(matches!(
            result,
            Err(KbError::Rules(RulesError::HazardousStart {
                marker: Marker::Pit,
                ..
            }))
        ));

        let safe_start = RulesConfig {
            start: Point::new(1, 0),
            ..Default::default()
        };
        let mut session = Session::new(parse_level("P, -").unwrap(), &safe_start).unwrap();
        let report = session.observe().unwrap();
        assert_eq!(report.percepts, BTreeSet::from([Percept::Breeze]));
        assert_eq!(
            report.hints.certain_for(Percept::Breeze).collect::<Vec<_>>(),
            vec![&Coord::from((0, 0))]
        );
    }

    #[test]
    fn test_observe_records_current_room() {
        let mut session = session();
        let report = session.observe().unwrap();

        assert!(report.percepts.is_empty());
        assert!(report.hints.is_empty());
        assert!(session
            .knowledge()
            .is_visited(&Coord::from((0, 0))));
    }

    #[test]
    fn test_walk_through_scenario() {
        let mut session = session();
        session.observe().unwrap();

        // east into (1,0)
        assert_eq!(session.apply(Command::MoveForward).outcome, Outcome::Continue);
        let report = session.observe().unwrap();
        assert_eq!(report.percepts, BTreeSet::from([Percept::Breeze]));

        // back to (0,0), then north into (0,1)
        session.apply(Command::TurnLeft);
        session.apply(Command::TurnLeft);
        session.apply(Command::MoveForward);
        session.apply(Command::TurnRight);
        session.apply(Command::MoveForward);
        assert_eq!(session.state().location, Point::new(0, 1));
        assert_eq!(session.state().orientation, Orientation::North);

        let report = session.observe().unwrap();
        assert_eq!(report.percepts, BTreeSet::from([Percept::Stench]));
        assert_eq!(
            report.hints.certain_for(Percept::Breeze).collect::<Vec<_>>(),
            vec![&Coord::from((2, 0))]
        );
        assert_eq!(
            report.hints.certain_for(Percept::Stench).collect::<Vec<_>>(),
            vec![&Coord::from((0, 2))]
        );
        assert!(report.hints.maybe.is_empty());
    }

    #[test]
    fn test_arrow_hit_neutralizes_knowledge() {
        let mut session = session();
        session.observe().unwrap();
        session.apply(Command::TurnLeft);
        session.apply(Command::MoveForward);
        session.observe().unwrap();

        let shot = session.apply(Command::ShootArrow);
        assert_eq!(shot.outcome, Outcome::ArrowHit);
        assert!(session.knowledge().is_hazard_neutralized());

        let report = session.observe().unwrap();
        assert_eq!(report.hints.certain_for(Percept::Stench).count(), 0);
        assert_eq!(report.hints.maybe_for(Percept::Stench).count(), 0);

        let again = session.apply(Command::ShootArrow);
        assert_eq!(again.outcome, Outcome::ArrowAlreadyUsed);

        // the dead Wumpus' room is now safe
        let step = session.apply(Command::MoveForward);
        assert_eq!(step.outcome, Outcome::FoundDeadWumpus);
        session.observe().unwrap();
        assert!(session.snapshot().wumpus_dead);
    }

    #[test]
    fn test_death_ends_session() {
        let mut session = session();
        session.apply(Command::MoveForward);
        let fell = session.apply(Command::MoveForward);
        assert_eq!(fell.outcome, Outcome::FellInPit);
        assert_eq!(session.state().status(), Status::Dead);
        assert!(session.is_over());

        let after = session.apply(Command::MoveForward);
        assert_eq!(after.outcome, Outcome::GameOver);
        assert_eq!(session.state().location, Point::new(2, 0));
    }

    #[test]
    fn test_snapshot_uses_session_id() {
        let mut session = session();
        session.observe().unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.session, session.id());
        assert!(snapshot.observations.contains_key("(0, 0)"));
    }
}
