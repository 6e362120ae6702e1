//! Text-grid rendering of a split pane.

use splitpane_core::{Orientation, PaneState};
use unicode_width::UnicodeWidthChar;

use crate::geometry::Rect;
use crate::layout::{DEFAULT_SPLITTER_THICKNESS, SplitLayout, pane_percentages};
use crate::style::SplitterStyle;

/// Marker for the trailing cell of a double-width character.
const CONTINUATION: char = '\0';

/// Fixed-size character surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl TextGrid {
    /// Blank grid of `width x height` spaces.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; usize::from(width) * usize::from(height)],
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Full grid area.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.index(x, y).map(|index| self.cells[index])
    }

    /// Write one cell; out-of-bounds writes are clipped.
    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = ch;
        }
    }

    /// Fill a rectangle, clipped to the grid.
    pub fn fill(&mut self, area: Rect, ch: char) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                self.set(x, y, ch);
            }
        }
    }

    /// Write `text` starting at `(x, y)` using at most `max_width` cells.
    ///
    /// Returns the number of cells used. Zero-width characters are dropped
    /// and a wide character that would straddle the limit or the grid's
    /// right edge is not written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16) -> u16 {
        let limit = max_width.min(self.width.saturating_sub(x));
        let mut used: u16 = 0;
        for ch in text.chars() {
            let width = match ch.width() {
                Some(width @ 1..=2) => width as u16,
                _ => continue,
            };
            if used.saturating_add(width) > limit {
                break;
            }
            self.set(x.saturating_add(used), y, ch);
            if width == 2 {
                self.set(x.saturating_add(used + 1), y, CONTINUATION);
            }
            used += width;
        }
        used
    }

    /// One row as displayed text.
    #[must_use]
    pub fn row_string(&self, y: u16) -> String {
        let Some(start) = self.index(0, y) else {
            return String::new();
        };
        self.cells[start..start + usize::from(self.width)]
            .iter()
            .filter(|ch| **ch != CONTINUATION)
            .collect()
    }

    /// All rows as displayed text.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_string(y)).collect()
    }
}

/// Something that can draw the splitter handle.
///
/// Hosts pass their own implementation to [`SplitView::splitter`] to replace
/// the default handle; input handling is unaffected because hit-testing runs
/// on the layout rectangle, not the glyphs.
pub trait SplitterWidget {
    fn render(&self, area: Rect, style: SplitterStyle, grid: &mut TextGrid);
}

/// Box-drawing splitter line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSplitter;

impl DefaultSplitter {
    /// Glyph for a given orientation and activity.
    #[must_use]
    pub const fn glyph(style: SplitterStyle) -> char {
        match (style.orientation, style.active, style.dragging) {
            (Orientation::Horizontal, true, true) => '┃',
            (Orientation::Horizontal, true, false) => '│',
            (Orientation::Horizontal, false, _) => '┊',
            (Orientation::Vertical, true, true) => '━',
            (Orientation::Vertical, true, false) => '─',
            (Orientation::Vertical, false, _) => '┈',
        }
    }
}

impl SplitterWidget for DefaultSplitter {
    fn render(&self, area: Rect, style: SplitterStyle, grid: &mut TextGrid) {
        grid.fill(area, Self::glyph(style));
    }
}

/// View configuration for one split pane.
pub struct SplitView<'a> {
    first_title: &'a str,
    second_title: &'a str,
    thickness: u16,
    splitter: Option<&'a dyn SplitterWidget>,
}

impl Default for SplitView<'_> {
    fn default() -> Self {
        Self {
            first_title: "",
            second_title: "",
            thickness: DEFAULT_SPLITTER_THICKNESS,
            splitter: None,
        }
    }
}

impl<'a> SplitView<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels drawn in the top-left corner of each pane.
    #[must_use]
    pub fn titles(mut self, first: &'a str, second: &'a str) -> Self {
        self.first_title = first;
        self.second_title = second;
        self
    }

    #[must_use]
    pub fn thickness(mut self, thickness: u16) -> Self {
        self.thickness = thickness;
        self
    }

    /// Replace the default splitter handle.
    #[must_use]
    pub fn splitter(mut self, splitter: &'a dyn SplitterWidget) -> Self {
        self.splitter = Some(splitter);
        self
    }

    #[must_use]
    pub fn layout(&self, state: &PaneState, area: Rect) -> SplitLayout {
        SplitLayout::compute(
            area,
            state.orientation(),
            state.split_ratio(),
            self.thickness,
        )
    }

    /// Draw both panes and the splitter, returning the layout used.
    pub fn render(&self, state: &PaneState, area: Rect, grid: &mut TextGrid) -> SplitLayout {
        let layout = self.layout(state, area);
        let (first_pct, second_pct) = pane_percentages(state.split_ratio());
        render_pane(grid, layout.first, self.first_title, first_pct);
        render_pane(grid, layout.second, self.second_title, second_pct);

        let style = SplitterStyle::for_state(state);
        match self.splitter {
            Some(custom) => custom.render(layout.splitter, style, grid),
            None => DefaultSplitter.render(layout.splitter, style, grid),
        }
        layout
    }
}

fn render_pane(grid: &mut TextGrid, area: Rect, title: &str, percent: f64) {
    if area.is_empty() {
        return;
    }
    grid.fill(area, ' ');
    let label = if title.is_empty() {
        format!("{percent:.0}%")
    } else {
        format!("{title} {percent:.0}%")
    };
    grid.put_str(area.x, area.y, &label, area.width);
}
