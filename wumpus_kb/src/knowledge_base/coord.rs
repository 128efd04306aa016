//! Coordinates - dimension-generic room positions and adjacency.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use wumpus_rules::{Grid, Point};

use crate::error::KbError;

/// A room coordinate with any number of axes.
///
/// The game only uses two axes, `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub Vec<usize>);

impl Coord {
    pub fn new(axes: impl Into<Vec<usize>>) -> Self {
        Self(axes.into())
    }

    /// Number of axes.
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Back to a grid point, if this is a two-axis coordinate.
    pub fn as_point(&self) -> Option<Point> {
        match self.0.as_slice() {
            [row, col] => Some(Point::new(*row, *col)),
            _ => None,
        }
    }
}

impl From<Point> for Coord {
    fn from(point: Point) -> Self {
        Self(vec![point.row, point.col])
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self(vec![row, col])
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, axis) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", axis)?;
        }
        write!(f, ")")
    }
}

/// Per-axis sizes of the space the knowledge base reasons over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds(Vec<usize>);

impl Bounds {
    pub fn new(sizes: impl Into<Vec<usize>>) -> Self {
        Self(sizes.into())
    }

    /// Bounds matching a grid's `(height, width)`.
    pub fn of_grid(grid: &Grid) -> Self {
        let (height, width) = grid.dimensions();
        Self(vec![height, width])
    }

    /// Fail unless `coord` has the right number of axes and lies inside.
    pub fn check(&self, coord: &Coord) -> Result<(), KbError> {
        self.check_dimensions(coord)?;
        if coord.0.iter().zip(&self.0).any(|(axis, size)| axis >= size) {
            return Err(KbError::OutOfBounds {
                coord: coord.clone(),
            });
        }
        Ok(())
    }

    /// Every coordinate one step away along exactly one axis, clipped to the bounds.
    pub fn adjacent(&self, coord: &Coord) -> Result<BTreeSet<Coord>, KbError> {
        self.check_dimensions(coord)?;
        Ok(self.neighbours(coord))
    }

    fn check_dimensions(&self, coord: &Coord) -> Result<(), KbError> {
        if coord.dimensions() != self.0.len() {
            return Err(KbError::InvalidPoint {
                expected: self.0.len(),
                found: coord.clone(),
            });
        }
        Ok(())
    }

    /// Adjacency for a coordinate already known to have the right axes.
    pub(crate) fn neighbours(&self, coord: &Coord) -> BTreeSet<Coord> {
        let mut adjacent = BTreeSet::new();
        for (axis, (&value, &size)) in coord.0.iter().zip(&self.0).enumerate() {
            let candidates = [value.checked_add(1), value.checked_sub(1)];
            for next in candidates.into_iter().flatten() {
                if next < size {
                    let mut neighbour = coord.clone();
                    neighbour.0[axis] = next;
                    adjacent.insert(neighbour);
                }
            }
        }
        adjacent
    }
}
