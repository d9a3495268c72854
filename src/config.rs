//! World dimensions and the one startup precondition.

use std::error::Error;
use std::fmt;

use crate::consts::{GAP_MARGIN_BOTTOM, GAP_MARGIN_TOP, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Dimensions of the simulated world. The terminal renderer scales this onto
/// whatever screen it has; the simulation never sees the terminal size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl WorldConfig {
    /// Smallest legal gap center.
    pub fn min_gap_y(&self) -> f32 {
        GAP_MARGIN_TOP
    }

    /// Largest legal gap center.
    pub fn max_gap_y(&self) -> f32 {
        self.height - GAP_MARGIN_BOTTOM
    }

    /// The world must leave the gap generator a non-empty range
    /// (`height > GAP_MARGIN_TOP + GAP_MARGIN_BOTTOM`). Checked once at
    /// session construction; a violation is fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_gap_y() <= self.min_gap_y() {
            return Err(ConfigError::DegenerateGapRange {
                height: self.height,
                min_required: GAP_MARGIN_TOP + GAP_MARGIN_BOTTOM,
            });
        }
        Ok(())
    }
}

/// Fatal configuration problems detected at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The world is too short to fit a pipe gap between its margins.
    DegenerateGapRange { height: f32, min_required: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DegenerateGapRange {
                height,
                min_required,
            } => write!(
                f,
                "world height {height} leaves no room for a pipe gap \
                 (must exceed {min_required})"
            ),
        }
    }
}

impl Error for ConfigError {}
