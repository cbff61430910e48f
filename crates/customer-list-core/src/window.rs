//! Viewport windowing for fixed-height rows
//!
//! Maps a scroll offset onto the contiguous index range that needs rendering,
//! plus the spacer heights above and below it. All pixel sizes are integers,
//! so `before + visible + after` always equals the full content height.

use std::ops::Range;

/// Rows to render and the spacer sizes around them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize,
    pub padding_before_px: u64,
    pub padding_after_px: u64,
}

impl Window {
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Height of the rendered rows
    pub fn visible_px(&self, row_height: u32) -> u64 {
        self.len() as u64 * row_height as u64
    }

    pub fn total_height_px(&self, row_height: u32) -> u64 {
        self.padding_before_px + self.visible_px(row_height) + self.padding_after_px
    }
}

/// Largest meaningful scroll offset for the content
pub fn max_scroll_offset(total_rows: usize, viewport_height: u32, row_height: u32) -> f64 {
    let content = total_rows as u64 * row_height as u64;
    content.saturating_sub(viewport_height as u64) as f64
}

/// Clamp to `[0, max_scroll_offset]`. NaN and negatives become 0.
pub fn clamp_scroll(scroll_offset: f64, total_rows: usize, viewport_height: u32, row_height: u32) -> f64 {
    let max = max_scroll_offset(total_rows, viewport_height, row_height);
    if scroll_offset.is_nan() || scroll_offset <= 0.0 {
        0.0
    } else {
        scroll_offset.min(max)
    }
}

/// Compute the window for a scroll position.
///
/// `buffer` rows are rendered beyond each edge of the viewport. Out-of-range
/// scroll offsets are clamped first, so the result always satisfies
/// `start_index <= end_index <= total_rows`.
pub fn window(
    total_rows: usize,
    scroll_offset: f64,
    viewport_height: u32,
    row_height: u32,
    buffer: usize,
) -> Window {
    if row_height == 0 || total_rows == 0 {
        return Window::default();
    }

    let scroll = clamp_scroll(scroll_offset, total_rows, viewport_height, row_height);
    let rows_in_view = (viewport_height as usize).div_ceil(row_height as usize);
    let first_visible = (scroll / row_height as f64).floor() as usize;

    let start_index = first_visible.saturating_sub(buffer).min(total_rows);
    let end_index = total_rows.min(start_index + rows_in_view + 2 * buffer);

    let row_px = row_height as u64;
    let total_px = total_rows as u64 * row_px;
    let padding_before_px = start_index as u64 * row_px;
    let visible_px = (end_index - start_index) as u64 * row_px;
    let padding_after_px = total_px.saturating_sub(padding_before_px + visible_px);

    Window {
        start_index,
        end_index,
        padding_before_px,
        padding_after_px,
    }
}
