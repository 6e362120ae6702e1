//! Host-facing configuration for building an initial [`PaneState`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{DEFAULT_SPLIT_RATIO, Orientation, ResizeBounds};
use crate::state::PaneState;

/// Serializable split-pane configuration.
///
/// Every field is optional in the serialized form; missing fields take the
/// component defaults. Values are normalized when the state is built, never
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SplitConfig {
    pub ratio: f64,
    pub orientation: Orientation,
    pub draggable: bool,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_SPLIT_RATIO,
            orientation: Orientation::default(),
            draggable: true,
            min_ratio: ResizeBounds::FULL.min(),
            max_ratio: ResizeBounds::FULL.max(),
        }
    }
}

impl SplitConfig {
    /// Parse a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, SplitConfigError> {
        serde_json::from_str(input).map_err(|error| SplitConfigError::Parse(error.to_string()))
    }

    /// Normalized resize bounds for this configuration.
    #[must_use]
    pub fn resize_bounds(&self) -> ResizeBounds {
        ResizeBounds::new(self.min_ratio, self.max_ratio)
    }

    /// Build the initial state.
    ///
    /// The ratio follows the direct-override rule (clamped to `[0, 1]`, not
    /// to the bounds).
    #[must_use]
    pub fn into_state(self) -> PaneState {
        PaneState::new()
            .with_orientation(self.orientation)
            .with_draggable(self.draggable)
            .with_resize_bounds(self.resize_bounds())
            .with_split_ratio(self.ratio)
    }
}

/// Configuration errors.
///
/// Only strict construction paths and parsing produce these; the component
/// itself normalizes bad values instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitConfigError {
    NonFiniteBound { min: f64, max: f64 },
    BoundOutOfRange { value: f64 },
    InvertedBounds { min: f64, max: f64 },
    Parse(String),
}

impl fmt::Display for SplitConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound { min, max } => {
                write!(f, "resize bounds must be finite (got min={min} max={max})")
            }
            Self::BoundOutOfRange { value } => {
                write!(f, "resize bound {value} is outside [0, 1]")
            }
            Self::InvertedBounds { min, max } => {
                write!(f, "resize bounds are inverted (min={min} > max={max})")
            }
            Self::Parse(message) => write!(f, "invalid split configuration: {message}"),
        }
    }
}

impl std::error::Error for SplitConfigError {}
