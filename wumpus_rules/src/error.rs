//! Error types for the rules crate.

use thiserror::Error;

use crate::grid::{Marker, Point};

/// Errors raised while building or querying the cave.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The grid has no rows, no columns, or rows of unequal length.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    /// A point lies outside the grid.
    #[error("point {point} is outside the {height}x{width} grid")]
    OutOfBounds {
        point: Point,
        height: usize,
        width: usize,
    },

    /// The start room holds a pit or the Wumpus.
    #[error("start room {point} holds a {marker:?}")]
    HazardousStart { point: Point, marker: Marker },

    /// The rules config could not be parsed.
    #[error("invalid rules config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Text that does not name a player command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized command `{0}`, expected one of R, L, F, S")]
pub struct ParseCommandError(pub String);
