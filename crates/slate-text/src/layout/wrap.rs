use super::cursor::Cursor;
use crate::metrics::GlyphMetrics;

impl Cursor {
    /// Regenerate the display-line table for `pixel_width`.
    ///
    /// A single greedy left-to-right pass: accumulate advance plus kerning
    /// against the previous glyph, and cut a line on a literal newline or
    /// when the next glyph would overflow the budget. The glyph that forced
    /// a width cut starts the next line, and the kerning accumulator resets
    /// at every cut. A trailing partial line is appended when non-empty.
    ///
    /// Each line starts at `left_pad` to match where the draw path places
    /// its first glyph. No hyphenation, no bidi, no combining-character
    /// awareness; the table is not maintained incrementally and goes stale
    /// as soon as the buffer or the width changes.
    pub fn generate_lines(&mut self, metrics: &dyn GlyphMetrics, pixel_width: f32, left_pad: f32) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut lines: Vec<String> = Vec::new();
        let mut x = left_pad;
        let mut line_start = 0usize;
        let mut line_len = 0usize;
        let mut prev: Option<char> = None;

        for (i, &ch) in chars.iter().enumerate() {
            if let Some(p) = prev {
                x += metrics.kern(p, ch);
            }
            let w = metrics.advance(ch);
            if ch == '\n' || x + w > pixel_width {
                lines.push(chars[line_start..line_start + line_len].iter().collect());
                line_len = 0;
                x = left_pad;
                line_start = if ch == '\n' { i + 1 } else { i };
                prev = None;
            }
            if ch != '\n' {
                line_len += 1;
                x += w;
                prev = Some(ch);
            }
        }
        if line_len != 0 {
            lines.push(chars[line_start..line_start + line_len].iter().collect());
        }
        self.lines = lines;
    }

    /// Rebuild the buffer from the current line table joined by newlines,
    /// then append a newline and `s`.
    ///
    /// The line table is stale afterwards; the caller re-runs
    /// `generate_lines`, so a batch of appended lines pays for one wrap pass.
    pub fn insert_line(&mut self, s: &str) {
        self.text = format!("{}\n{}", self.lines.join("\n"), s);
    }

    /// Wrapped display lines from the last `generate_lines` pass.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Scroll position of the visible line window, counted from the bottom.
    pub fn line_offset(&self) -> usize {
        self.line_offset
    }

    /// Number of lines the owning widget can show at once.
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.max_lines = max_lines;
    }

    /// Scroll the visible window up one line (toward older lines). Returns
    /// whether the window moved.
    pub fn scroll_line_up(&mut self) -> bool {
        if self.line_offset + 1 < self.lines.len() {
            self.line_offset += 1;
            true
        } else {
            false
        }
    }

    /// Scroll the visible window down one line (toward the newest line).
    /// Returns whether the window moved.
    pub fn scroll_line_down(&mut self) -> bool {
        if self.line_offset > 0 {
            self.line_offset -= 1;
            true
        } else {
            false
        }
    }
}
