//! Level text parsing.
//!
//! A level is written as comma-separated rows, top row first:
//!
//! ```text
//! -, -, -, G
//! W, -, P, -
//! -, -, -, -
//! -, -, P, -
//! ```
//!
//! The bottom-left room of the text becomes `(0, 0)`. `row` counts text
//! columns from the left and `col` counts text lines from the bottom, so
//! moving East increases `row` and moving North increases `col`.

use crate::error::RulesError;
use crate::grid::{Grid, Marker};

/// Marker for a single cell token. Unknown tokens are empty rooms.
fn parse_marker(token: &str) -> Marker {
    match token {
        "P" | "p" => Marker::Pit,
        "W" | "w" => Marker::Wumpus,
        "G" | "g" => Marker::Gold,
        _ => Marker::Empty,
    }
}

/// Parse level text into a grid.
pub fn parse_level(text: &str) -> Result<Grid, RulesError> {
    if text.trim().is_empty() {
        return Err(RulesError::MalformedGrid("level has no rows".to_string()));
    }

    let lines: Vec<Vec<Marker>> = text
        .trim()
        .lines()
        .map(|line| {
            line.split(',')
                .map(|token| parse_marker(token.trim()))
                .collect()
        })
        .collect();

    let width = lines[0].len();
    if let Some(index) = lines.iter().position(|line| line.len() != width) {
        return Err(RulesError::MalformedGrid(format!(
            "level line {} has {} cells, expected {}",
            index + 1,
            lines[index].len(),
            width
        )));
    }

    // cells[x][y] = lines[height - 1 - y][x]
    let cells = (0..width)
        .map(|x| lines.iter().rev().map(|line| line[x]).collect())
        .collect();

    let grid = Grid::new(cells)?;
    log::debug!("parsed level with dimensions {:?}", grid.dimensions());
    Ok(grid)
}
