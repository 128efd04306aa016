//! Player state and the turn-based transitions that act on it.
//!
//! A [`GameState`] is never mutated in place. [`GameState::apply`] returns a
//! fresh value together with an [`Outcome`] describing what happened, so a
//! sequence of states can be kept and replayed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::RulesConfig;
use crate::error::ParseCommandError;
use crate::grid::{Grid, Marker, Orientation, Point};

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
    ShootArrow,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Command::TurnLeft),
            "R" => Ok(Command::TurnRight),
            "F" => Ok(Command::MoveForward),
            "S" => Ok(Command::ShootArrow),
            _ => Err(ParseCommandError(s.trim().to_string())),
        }
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Dead,
    Won,
}

/// What a transition did, for the front end to narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Nothing notable happened.
    Continue,
    /// Walked into a wall; nothing changed.
    Bump,
    FellInPit,
    Eaten,
    /// Entered the room of the slain Wumpus.
    FoundDeadWumpus,
    FoundGold,
    ArrowHit,
    ArrowMiss,
    ArrowAlreadyUsed,
    /// The game already ended; the command was ignored.
    GameOver,
}

/// The result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub outcome: Outcome,
}

/// The player's situation after some number of turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub location: Point,
    pub orientation: Orientation,
    pub has_arrow: bool,
    pub alive: bool,
    pub won: bool,
    /// The Wumpus has been shot. Its room is now safe to enter.
    pub wumpus_dead: bool,
}

impl GameState {
    /// Initial state at the configured start room.
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            location: config.start,
            orientation: config.orientation,
            has_arrow: true,
            alive: true,
            won: false,
            wumpus_dead: false,
        }
    }

    pub fn status(&self) -> Status {
        if !self.alive {
            Status::Dead
        } else if self.won {
            Status::Won
        } else {
            Status::Playing
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != Status::Playing
    }

    /// Apply a command and return the next state.
    pub fn apply(&self, grid: &Grid, command: Command) -> Transition {
        if self.is_over() {
            return self.unchanged(Outcome::GameOver);
        }

        let transition = match command {
            Command::TurnLeft => self.turned(self.orientation.left()),
            Command::TurnRight => self.turned(self.orientation.right()),
            Command::MoveForward => self.move_forward(grid),
            Command::ShootArrow => self.shoot_arrow(grid),
        };

        log::debug!(
            "{:?} at {} facing {:?} -> {:?}, now at {}",
            command,
            self.location,
            self.orientation,
            transition.outcome,
            transition.state.location
        );
        transition
    }

    fn unchanged(&self, outcome: Outcome) -> Transition {
        Transition {
            state: *self,
            outcome,
        }
    }

    fn turned(&self, orientation: Orientation) -> Transition {
        Transition {
            state: GameState {
                orientation,
                ..*self
            },
            outcome: Outcome::Continue,
        }
    }

    fn move_forward(&self, grid: &Grid) -> Transition {
        let Some(target) = grid.step(self.location, self.orientation) else {
            return self.unchanged(Outcome::Bump);
        };

        let moved = GameState {
            location: target,
            ..*self
        };

        // `step` only yields in-bounds points
        let marker = grid.value_at(target).unwrap_or_default();
        let (state, outcome) = match marker {
            Marker::Pit => (GameState { alive: false, ..moved }, Outcome::FellInPit),
            Marker::Wumpus if !self.wumpus_dead => {
                (GameState { alive: false, ..moved }, Outcome::Eaten)
            }
            Marker::Wumpus => (moved, Outcome::FoundDeadWumpus),
            Marker::Gold => (GameState { won: true, ..moved }, Outcome::FoundGold),
            Marker::Empty => (moved, Outcome::Continue),
        };

        if state.is_over() {
            log::info!("game over at {}: {:?}", target, outcome);
        }
        Transition { state, outcome }
    }

    fn shoot_arrow(&self, grid: &Grid) -> Transition {
        if !self.has_arrow {
            return self.unchanged(Outcome::ArrowAlreadyUsed);
        }

        let spent = GameState {
            has_arrow: false,
            ..*self
        };

        let mut room = self.location;
        while let Some(next) = grid.step(room, self.orientation) {
            if grid.value_at(next).ok() == Some(Marker::Wumpus) {
                log::info!("arrow from {} hit the Wumpus at {}", self.location, next);
                return Transition {
                    state: GameState {
                        wumpus_dead: true,
                        ..spent
                    },
                    outcome: Outcome::ArrowHit,
                };
            }
            room = next;
        }

        Transition {
            state: spent,
            outcome: Outcome::ArrowMiss,
        }
    }
}
