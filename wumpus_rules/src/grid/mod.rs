//! The cave grid - an immutable rectangle of rooms and their contents.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// A room coordinate on the grid.
///
/// `row` grows eastward and `col` grows northward (see [`Orientation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a room contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Marker {
    #[default]
    Empty,
    Pit,
    Wumpus,
    Gold,
}

impl Marker {
    /// Whether entering this room can kill the player.
    pub fn is_hazard(&self) -> bool {
        matches!(self, Marker::Pit | Marker::Wumpus)
    }
}

/// The direction the player is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Orientation {
    North,
    #[default]
    East,
    South,
    West,
}

impl Orientation {
    /// Rotate 90 degrees counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Rotate 90 degrees clockwise.
    pub fn right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Offset applied to `(row, col)` when stepping in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Orientation::North => (0, 1),
            Orientation::South => (0, -1),
            Orientation::East => (1, 0),
            Orientation::West => (-1, 0),
        }
    }

    /// Upper-case name used in console output.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::North => "NORTH",
            Orientation::East => "EAST",
            Orientation::South => "SOUTH",
            Orientation::West => "WEST",
        }
    }
}

/// Neighbour search order. Kept fixed so adjacency results are deterministic.
const NEIGHBOUR_ORDER: [Orientation; 4] = [
    Orientation::North,
    Orientation::South,
    Orientation::East,
    Orientation::West,
];

/// The immutable cave layout.
///
/// `cells[row][col]`; every row has the same, non-zero length. Deserializing
/// goes through [`Grid::new`], so the same checks apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Marker>>", into = "Vec<Vec<Marker>>")]
pub struct Grid {
    cells: Vec<Vec<Marker>>,
}

impl Grid {
    /// Build a grid, rejecting empty or ragged input.
    pub fn new(cells: Vec<Vec<Marker>>) -> Result<Self, RulesError> {
        let Some(first) = cells.first() else {
            return Err(RulesError::MalformedGrid("no rows".to_string()));
        };
        let width = first.len();
        if width == 0 {
            return Err(RulesError::MalformedGrid("rows have no columns".to_string()));
        }
        if let Some((index, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(RulesError::MalformedGrid(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                width
            )));
        }
        Ok(Self { cells })
    }

    /// `(height, width)` of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cells.len(), self.cells[0].len())
    }

    /// Check whether a point lies inside the grid.
    pub fn contains(&self, point: Point) -> bool {
        let (height, width) = self.dimensions();
        point.row < height && point.col < width
    }

    /// Marker at a point.
    pub fn value_at(&self, point: Point) -> Result<Marker, RulesError> {
        if !self.contains(point) {
            let (height, width) = self.dimensions();
            return Err(RulesError::OutOfBounds {
                point,
                height,
                width,
            });
        }
        Ok(self.cells[point.row][point.col])
    }

    /// The neighbour one step away in `orientation`, if it is inside the grid.
    pub fn step(&self, point: Point, orientation: Orientation) -> Option<Point> {
        let (d_row, d_col) = orientation.offset();
        let row = point.row.checked_add_signed(d_row)?;
        let col = point.col.checked_add_signed(d_col)?;
        let next = Point::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Orthogonal in-bounds neighbours of a point, in a fixed order.
    pub fn adjacent_points(&self, point: Point) -> Vec<Point> {
        NEIGHBOUR_ORDER
            .iter()
            .filter_map(|&orientation| self.step(point, orientation))
            .collect()
    }

    /// Markers of the neighbours of a point.
    pub fn adjacent_values(&self, point: Point) -> impl Iterator<Item = Marker> + '_ {
        self.adjacent_points(point)
            .into_iter()
            .map(move |p| self.cells[p.row][p.col])
    }

    /// All points holding the given marker, in row-major order.
    pub fn find(&self, marker: Marker) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(move |(_, m)| **m == marker)
                .map(move |(col, _)| Point::new(row, col))
        })
    }
}

impl TryFrom<Vec<Vec<Marker>>> for Grid {
    type Error = RulesError;

    fn try_from(cells: Vec<Vec<Marker>>) -> Result<Self, Self::Error> {
        Grid::new(cells)
    }
}

impl From<Grid> for Vec<Vec<Marker>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}
