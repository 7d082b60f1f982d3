use super::cursor::{Cursor, EDGE_SLACK};
use crate::metrics::GlyphMetrics;

/// Result of a width-budgeted measurement walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitWidth {
    /// Accumulated advance + kerning of the glyphs that fit.
    pub width: f32,
    /// Number of characters that fit within the budget.
    pub fitted: usize,
    /// True when the walk stopped because the next glyph would overflow.
    pub truncated: bool,
}

/// Walk `text` left to right, accumulating advance plus kerning, and stop
/// the instant the next glyph would exceed `pixel_width`.
pub fn fit_width(metrics: &dyn GlyphMetrics, text: &str, pixel_width: f32) -> FitWidth {
    let mut x = 0.0f32;
    let mut prev: Option<char> = None;
    let mut fitted = 0usize;
    for ch in text.chars() {
        let mut nx = x;
        if let Some(p) = prev {
            nx += metrics.kern(p, ch);
        }
        let w = metrics.advance(ch);
        if nx + w > pixel_width {
            return FitWidth {
                width: x,
                fitted,
                truncated: true,
            };
        }
        x = nx + w;
        fitted += 1;
        prev = Some(ch);
    }
    FitWidth {
        width: x,
        fitted,
        truncated: false,
    }
}

/// Map a relative x coordinate to the character index whose glyph first
/// reaches it, clamped by `pixel_width`.
///
/// Returns the index (relative to the start of `text`) of the first glyph
/// whose accumulated extent reaches `target_x`, or the character count when
/// the walk completes without reaching it.
pub fn locate_index_at_x(
    metrics: &dyn GlyphMetrics,
    text: &str,
    target_x: f32,
    pixel_width: f32,
) -> usize {
    let mut x = 0.0f32;
    let mut prev: Option<char> = None;
    let mut count = 0usize;
    for (i, ch) in text.chars().enumerate() {
        if let Some(p) = prev {
            x += metrics.kern(p, ch);
        }
        let w = metrics.advance(ch);
        if x + w > target_x || x + w > pixel_width {
            return i;
        }
        x += w;
        prev = Some(ch);
        count = i + 1;
    }
    count
}

/// Caret placement computed by the cursor-aware measurement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretLayout {
    /// Accumulated width of the visible glyphs that fit the budget.
    pub width: f32,
    /// Number of visible characters that fit.
    pub fitted: usize,
    /// Caret x relative to the left edge of the visible slice.
    pub caret_x: f32,
    /// Whether the caret should be drawn this pass.
    pub caret_visible: bool,
}

impl Cursor {
    /// Cursor-aware measurement pass over the visible slice.
    ///
    /// Walks `text[scroll_offset..]` with the same accumulation as
    /// [`fit_width`], sampling the caret x where the running index meets the
    /// caret's index within the slice, and refreshes `scroll_edge` from what
    /// fit: a truncated walk pins the edge at the truncation point (plus the
    /// active offset); an untruncated one pins it to the buffer end when the
    /// window has scrolled, and pushes it far past the end otherwise.
    pub fn layout_visible(&mut self, metrics: &dyn GlyphMetrics, pixel_width: f32) -> CaretLayout {
        let visible: Vec<char> = self.text.chars().skip(self.scroll_offset).collect();
        let caret_index = self.position.saturating_sub(self.scroll_offset);

        let mut x = 0.0f32;
        let mut caret_x = 0.0f32;
        let mut prev: Option<char> = None;
        let mut fitted = 0usize;
        let mut truncated_at: Option<usize> = None;

        for (i, &ch) in visible.iter().enumerate() {
            if let Some(p) = prev {
                x += metrics.kern(p, ch);
            }
            if i == caret_index {
                caret_x = x;
            }
            let w = metrics.advance(ch);
            if x + w > pixel_width {
                truncated_at = Some(i);
                break;
            }
            x += w;
            fitted += 1;
            prev = Some(ch);
        }
        if truncated_at.is_none() && caret_index >= visible.len() {
            caret_x = x;
        }

        let len = self.char_len();
        self.scroll_edge = match truncated_at {
            Some(i) => i + self.scroll_offset,
            None if self.scroll_offset > 0 => len,
            None => len + EDGE_SLACK,
        };
        self.resync_window();

        CaretLayout {
            width: x,
            fitted,
            caret_x,
            caret_visible: self.caret_visible,
        }
    }

    /// Combined hit test and placement: map `target_x` (relative to the left
    /// edge of the visible slice) to a character index and move the caret
    /// there in the same metrics pass, so the placement cannot disagree with
    /// the widths it was computed from. Returns the new caret index.
    ///
    /// The pure form is [`locate_index_at_x`].
    pub fn click_to_place(
        &mut self,
        metrics: &dyn GlyphMetrics,
        target_x: f32,
        pixel_width: f32,
    ) -> usize {
        let visible: String = self.text.chars().skip(self.scroll_offset).collect();
        let idx = locate_index_at_x(metrics, &visible, target_x, pixel_width);
        self.position = idx + self.scroll_offset;
        self.resync_window();
        self.position
    }
}
