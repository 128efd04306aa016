//! Rules configuration loaded from TOML.
//!
//! ```toml
//! start = { row = 0, col = 0 }
//! orientation = "East"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::grid::{Grid, Orientation, Point};

/// Where and how a new game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Room the player starts in.
    pub start: Point,
    /// Direction the player initially faces.
    pub orientation: Orientation,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            start: Point::new(0, 0),
            orientation: Orientation::East,
        }
    }
}

impl RulesConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        Ok(toml::from_str(text)?)
    }

    /// Check that the config fits the given grid.
    ///
    /// The start room must be inside the grid and free of hazards.
    pub fn validate(&self, grid: &Grid) -> Result<(), RulesError> {
        let marker = grid.value_at(self.start)?;
        if marker.is_hazard() {
            return Err(RulesError::HazardousStart {
                point: self.start,
                marker,
            });
        }
        Ok(())
    }
}
