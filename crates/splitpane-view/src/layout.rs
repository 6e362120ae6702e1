//! Converts a split ratio into pane and splitter rectangles.

use splitpane_core::{Orientation, clamp_unit};

use crate::geometry::Rect;

/// Default splitter thickness in cells.
pub const DEFAULT_SPLITTER_THICKNESS: u16 = 1;

/// Rectangles for one rendered split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitLayout {
    pub first: Rect,
    pub splitter: Rect,
    pub second: Rect,
}

impl SplitLayout {
    /// Lay out `area` along the orientation's axis.
    ///
    /// The splitter takes `thickness` cells (capped at the axis length); the
    /// first pane gets `round(ratio * remaining)` and the second pane the
    /// complement.
    #[must_use]
    pub fn compute(area: Rect, orientation: Orientation, ratio: f64, thickness: u16) -> Self {
        let axis_len = match orientation {
            Orientation::Horizontal => area.width,
            Orientation::Vertical => area.height,
        };
        let thickness = thickness.min(axis_len);
        let available = axis_len - thickness;
        let first_len = ((clamp_unit(ratio) * f64::from(available)).round() as u16).min(available);
        let second_len = available - first_len;

        match orientation {
            Orientation::Horizontal => {
                let splitter_x = area.x.saturating_add(first_len);
                let second_x = splitter_x.saturating_add(thickness);
                Self {
                    first: Rect::new(area.x, area.y, first_len, area.height),
                    splitter: Rect::new(splitter_x, area.y, thickness, area.height),
                    second: Rect::new(second_x, area.y, second_len, area.height),
                }
            }
            Orientation::Vertical => {
                let splitter_y = area.y.saturating_add(first_len);
                let second_y = splitter_y.saturating_add(thickness);
                Self {
                    first: Rect::new(area.x, area.y, area.width, first_len),
                    splitter: Rect::new(area.x, splitter_y, area.width, thickness),
                    second: Rect::new(area.x, second_y, area.width, second_len),
                }
            }
        }
    }

    /// Whether a cell lies on the splitter handle.
    #[must_use]
    pub const fn splitter_hit(&self, x: u16, y: u16) -> bool {
        self.splitter.contains(x, y)
    }
}

/// Percentage sizes for the two panes: `ratio * 100` and its complement.
#[must_use]
pub fn pane_percentages(ratio: f64) -> (f64, f64) {
    let first = clamp_unit(ratio) * 100.0;
    (first, 100.0 - first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_split_divides_width() {
        let layout = SplitLayout::compute(Rect::new(0, 0, 21, 5), Orientation::Horizontal, 0.5, 1);
        assert_eq!(layout.first, Rect::new(0, 0, 10, 5));
        assert_eq!(layout.splitter, Rect::new(10, 0, 1, 5));
        assert_eq!(layout.second, Rect::new(11, 0, 10, 5));
    }

    #[test]
    fn vertical_split_divides_height() {
        let layout = SplitLayout::compute(Rect::new(2, 3, 8, 11), Orientation::Vertical, 0.3, 1);
        assert_eq!(layout.first, Rect::new(2, 3, 8, 3));
        assert_eq!(layout.splitter, Rect::new(2, 6, 8, 1));
        assert_eq!(layout.second, Rect::new(2, 7, 8, 7));
    }

    #[test]
    fn extreme_ratios_collapse_one_pane() {
        let area = Rect::new(0, 0, 10, 1);
        let left = SplitLayout::compute(area, Orientation::Horizontal, 0.0, 1);
        assert_eq!(left.first.width, 0);
        assert_eq!(left.second.width, 9);
        let right = SplitLayout::compute(area, Orientation::Horizontal, 1.0, 1);
        assert_eq!(right.first.width, 9);
        assert_eq!(right.second.width, 0);
    }

    #[test]
    fn splitter_thickness_is_capped_by_area() {
        let layout = SplitLayout::compute(Rect::new(0, 0, 2, 4), Orientation::Horizontal, 0.5, 5);
        assert_eq!(layout.splitter.width, 2);
        assert_eq!(layout.first.width + layout.second.width, 0);
    }

    #[test]
    fn splitter_hit_testing() {
        let layout = SplitLayout::compute(Rect::new(0, 0, 21, 5), Orientation::Horizontal, 0.5, 1);
        assert!(layout.splitter_hit(10, 4));
        assert!(!layout.splitter_hit(9, 4));
        assert!(!layout.splitter_hit(11, 0));
    }

    #[test]
    fn percentages_are_complementary() {
        assert_eq!(pane_percentages(0.25), (25.0, 75.0));
        assert_eq!(pane_percentages(2.0), (100.0, 0.0));
    }
}
