#![forbid(unsafe_code)]

//! Pointer, extent, and orientation primitives plus the ratio clamping rules.

use serde::{Deserialize, Serialize};

use crate::config::SplitConfigError;

/// Ratio assigned to the first pane when nothing else is configured.
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// Pointer position in absolute document (or terminal) coordinates.
///
/// Positions are never container-relative; only differences between two
/// positions feed the resize math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// The `(0, 0)` fallback used when an input sample carries no coordinates.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Measured size of the container holding both panes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerExtent {
    pub width: f64,
    pub height: f64,
}

impl ContainerExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis along which the two panes are arranged.
///
/// `Horizontal` places panes left/right and drags along X; `Vertical` places
/// them top/bottom and drags along Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Signed pointer movement along the drag axis.
    #[must_use]
    pub fn axis_delta(self, from: PointerPosition, to: PointerPosition) -> f64 {
        match self {
            Self::Horizontal => to.x - from.x,
            Self::Vertical => to.y - from.y,
        }
    }

    /// Container length along the drag axis.
    #[must_use]
    pub fn axis_extent(self, extent: ContainerExtent) -> f64 {
        match self {
            Self::Horizontal => extent.width,
            Self::Vertical => extent.height,
        }
    }

    /// The other orientation.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Clamp a ratio to the absolute `[0, 1]` range.
///
/// NaN has no position on the axis and maps to [`DEFAULT_SPLIT_RATIO`].
#[must_use]
pub fn clamp_unit(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return DEFAULT_SPLIT_RATIO;
    }
    ratio.clamp(0.0, 1.0)
}

/// Inclusive `[min, max]` clamp applied to drag-driven resizing.
///
/// Both ends always lie in `[0, 1]` with `min <= max`; the fields are private
/// so no caller can build an inverted pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResizeBounds {
    min: f64,
    max: f64,
}

impl ResizeBounds {
    /// The unrestricted `[0, 1]` range.
    pub const FULL: Self = Self { min: 0.0, max: 1.0 };

    /// Build bounds, normalizing malformed input instead of rejecting it.
    ///
    /// Non-finite ends fall back to the matching end of [`Self::FULL`], finite
    /// ends are clamped to `[0, 1]`, and an inverted pair is swapped.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() {
            min.clamp(0.0, 1.0)
        } else {
            Self::FULL.min
        };
        let max = if max.is_finite() {
            max.clamp(0.0, 1.0)
        } else {
            Self::FULL.max
        };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Build bounds, rejecting anything [`Self::new`] would have to repair.
    pub fn try_new(min: f64, max: f64) -> Result<Self, SplitConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SplitConfigError::NonFiniteBound { min, max });
        }
        for value in [min, max] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SplitConfigError::BoundOutOfRange { value });
            }
        }
        if min > max {
            return Err(SplitConfigError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> f64 {
        self.max
    }

    /// Clamp a ratio into these bounds.
    #[must_use]
    pub fn clamp(self, ratio: f64) -> f64 {
        ratio.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, ratio: f64) -> bool {
        (self.min..=self.max).contains(&ratio)
    }
}

impl Default for ResizeBounds {
    fn default() -> Self {
        Self::FULL
    }
}
