//! Row windowing for virtualized lists.
//!
//! Given a fixed row height, the scroll offset and the viewport height, pick
//! the contiguous range of rows worth materializing. Rows outside the range
//! are never projected.

use std::ops::Range;

/// Rows rendered before the viewport has been measured.
pub const DEFAULT_INITIAL_NUM_TO_RENDER: usize = 10;

/// Windowing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Height of a single row, in the same unit as the viewport.
    pub row_height: u32,
    /// Extra rows kept above and below the visible region.
    pub overscan: usize,
    /// Rows rendered while the viewport height is still unknown.
    pub initial_num_to_render: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            row_height: 96,
            overscan: 3,
            initial_num_to_render: DEFAULT_INITIAL_NUM_TO_RENDER,
        }
    }
}

impl WindowConfig {
    /// Set the row height.
    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Set the overscan.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Set the number of rows rendered before layout.
    pub fn with_initial_num_to_render(mut self, rows: usize) -> Self {
        self.initial_num_to_render = rows;
        self
    }

    /// Range of row indices to materialize for `count` rows.
    ///
    /// Always a sub-range of `0..count`.
    pub fn visible_range(&self, count: usize, viewport: Viewport) -> Range<usize> {
        if count == 0 {
            return 0..0;
        }
        if viewport.height == 0 {
            return 0..self.initial_num_to_render.min(count);
        }

        let row_height = self.effective_row_height();
        let top = u64::from(viewport.offset);
        let bottom = top + u64::from(viewport.height);

        let first = usize::try_from(top / row_height).unwrap_or(usize::MAX);
        let last = usize::try_from(bottom.div_ceil(row_height)).unwrap_or(usize::MAX);

        let end = last.saturating_add(self.overscan).min(count);
        let start = first.saturating_sub(self.overscan).min(end);
        start..end
    }

    /// Total content height for `count` rows.
    pub fn content_height(&self, count: usize) -> u64 {
        self.effective_row_height() * count as u64
    }

    // zero is treated as one unit
    fn effective_row_height(&self) -> u64 {
        u64::from(self.row_height.max(1))
    }
}

/// The visible region of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Scroll offset from the top of the content.
    pub offset: u32,
    /// Visible height. Zero until laid out.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport.
    pub const fn new(offset: u32, height: u32) -> Self {
        Self { offset, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WindowConfig {
        WindowConfig::default()
            .with_row_height(100)
            .with_overscan(2)
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(config().visible_range(0, Viewport::new(0, 500)), 0..0);
    }

    #[test]
    fn unmeasured_viewport_uses_initial_count() {
        let c = config();
        assert_eq!(c.visible_range(50, Viewport::default()), 0..10);
        assert_eq!(c.visible_range(4, Viewport::default()), 0..4);
    }

    #[test]
    fn top_of_list_window() {
        // rows 0..5 visible, +2 overscan below
        assert_eq!(config().visible_range(100, Viewport::new(0, 500)), 0..7);
    }

    #[test]
    fn scrolled_window_includes_overscan_both_sides() {
        // offset 1050 -> first row 10; bottom 1550 -> last partial row 15
        assert_eq!(config().visible_range(100, Viewport::new(1050, 500)), 8..18);
    }

    #[test]
    fn window_is_clamped_to_count() {
        assert_eq!(config().visible_range(12, Viewport::new(1000, 500)), 8..12);
    }

    #[test]
    fn scrolled_past_end_yields_empty_range_at_end() {
        let range = config().visible_range(5, Viewport::new(10_000, 500));
        assert!(range.is_empty());
        assert!(range.end <= 5);
    }

    #[test]
    fn zero_row_height_does_not_divide_by_zero() {
        let c = WindowConfig::default().with_row_height(0).with_overscan(0);
        let range = c.visible_range(3, Viewport::new(0, 10));
        assert_eq!(range, 0..3);
    }

    #[test]
    fn content_height_scales_with_rows() {
        assert_eq!(config().content_height(7), 700);
    }

    #[test]
    fn zero_row_height_content_covers_rendered_rows() {
        let c = WindowConfig::default().with_row_height(0).with_overscan(0);
        let rendered = c.visible_range(3, Viewport::new(0, 10)).len() as u64;
        assert_eq!(c.content_height(3), 3);
        assert!(c.content_height(3) >= rendered);
    }
}
