use std::time::{Duration, Instant};

/// Default caret blink interval.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(667);

/// Slack added past the buffer end when the visible window is unbounded.
///
/// Kept as a finite slack (rather than `usize::MAX`) so that window
/// arithmetic can never overflow.
pub(crate) const EDGE_SLACK: usize = 100;

/// Text buffer plus caret and horizontal scroll-window state.
///
/// Positions are counted in characters, with `0 <= position <= len`. The
/// scroll window is the pair (`scroll_offset`, `scroll_edge`): the index of
/// the first character still in view and the hysteresis boundary past which
/// the view must slide. The invariant
/// `scroll_offset <= position <= scroll_edge` is re-established after every
/// mutating operation.
///
/// The cursor has no internal synchronization: it is exclusively owned by
/// one widget and must be driven from a single logical thread, with all
/// calls serialized by the enclosing event loop.
#[derive(Debug, Clone)]
pub struct Cursor {
    pub(crate) text: String,
    pub(crate) lines: Vec<String>,
    pub(crate) position: usize,
    pub(crate) scroll_offset: usize,
    pub(crate) scroll_edge: usize,
    pub(crate) line_offset: usize,
    pub(crate) max_lines: usize,
    pub(crate) caret_visible: bool,
    last_blink: Instant,
    blink_interval: Duration,
}

impl Cursor {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            lines: Vec::new(),
            position: 0,
            scroll_offset: 0,
            scroll_edge: len + EDGE_SLACK,
            line_offset: 0,
            max_lines: 0,
            caret_visible: true,
            last_blink: Instant::now(),
            blink_interval: BLINK_INTERVAL,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Buffer length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Caret index in characters.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the first character still in view.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Boundary past which the view must slide. May exceed the buffer length
    /// when the window is effectively unbounded.
    pub fn scroll_edge(&self) -> usize {
        self.scroll_edge
    }

    /// Whether the caret should be drawn this frame. Rendering hint only.
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    pub fn set_caret_visible(&mut self, visible: bool) {
        self.caret_visible = visible;
    }

    pub fn set_blink_interval(&mut self, interval: Duration) {
        self.blink_interval = interval;
    }

    /// Move the caret one character left, sliding the window along when the
    /// caret falls off its left edge. Returns whether a move occurred.
    pub fn move_left(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        if self.position < self.scroll_offset {
            self.scroll_offset -= 1;
            self.scroll_edge = self.scroll_edge.saturating_sub(1);
        }
        self.caret_visible = true;
        true
    }

    /// Move the caret one character right, sliding the window along when the
    /// caret crosses its right edge. Returns whether a move occurred.
    pub fn move_right(&mut self) -> bool {
        if self.position >= self.char_len() {
            return false;
        }
        self.position += 1;
        if self.position > self.scroll_edge {
            self.scroll_edge += 1;
            self.scroll_offset += 1;
        }
        self.caret_visible = true;
        true
    }

    /// Walk the caret to `target` with repeated single steps.
    ///
    /// O(|target - position|) on purpose: reusing the single-step moves keeps
    /// the offset/edge bookkeeping consistent instead of recomputing it from
    /// scratch. Returns whether the position changed.
    pub fn move_to(&mut self, target: usize) -> bool {
        if target > self.position {
            while self.position < target {
                if !self.move_right() {
                    break;
                }
            }
            true
        } else if target < self.position {
            while self.position > target {
                if !self.move_left() {
                    break;
                }
            }
            true
        } else {
            false
        }
    }

    /// Splice `s` into the buffer at the caret, then advance by one step.
    ///
    /// The caret advances by exactly one step even when `s` holds more than
    /// one character.
    pub fn insert(&mut self, s: &str) {
        let at = self.byte_index(self.position);
        self.text.insert_str(at, s);
        self.move_right();
        self.resync_window();
    }

    /// Remove the character before the caret. Returns `false` at the buffer
    /// start, `true` otherwise.
    ///
    /// When the window has scrolled and the caret sits at the tracked
    /// boundary, the whole window slides left by one in lockstep instead of
    /// taking a navigation step; that keeps the caret pinned at the visible
    /// edge while text shrinks.
    pub fn backspace(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        let start = self.byte_index(self.position - 1);
        let end = self.byte_index(self.position);
        self.text.replace_range(start..end, "");
        if self.scroll_offset > 0 && self.char_len() + 1 == self.scroll_edge {
            self.position -= 1;
            self.scroll_edge -= 1;
            self.scroll_offset -= 1;
            self.caret_visible = true;
        } else {
            self.move_left();
        }
        self.resync_window();
        true
    }

    /// Replace the buffer, clamping the caret and scroll window to the new
    /// length.
    pub fn set_text(&mut self, s: impl Into<String>) {
        self.text = s.into();
        let len = self.char_len();
        if self.position > len {
            self.move_to(len);
        }
        self.scroll_offset = self.scroll_offset.min(self.position);
        self.scroll_edge = if self.scroll_offset == 0 {
            len + EDGE_SLACK
        } else {
            len
        };
        self.resync_window();
    }

    /// Idle tick: catch the window up if the caret ran past the tracked
    /// boundary, and toggle the blink state on its interval. Either condition
    /// requests a redraw; both are checked on every call.
    pub fn tick(&mut self) -> bool {
        let mut redraw = false;
        if self.position > self.scroll_edge {
            self.scroll_offset += self.position - self.scroll_edge;
            self.scroll_edge = self.position;
            redraw = true;
        }
        if self.last_blink.elapsed() >= self.blink_interval {
            self.last_blink = Instant::now();
            self.caret_visible = !self.caret_visible;
            redraw = true;
        }
        redraw
    }

    /// Re-establish `scroll_offset <= position <= scroll_edge` by sliding the
    /// window toward the caret.
    pub(crate) fn resync_window(&mut self) {
        if self.scroll_offset > self.position {
            let slide = self.scroll_offset - self.position;
            self.scroll_offset = self.position;
            self.scroll_edge = self.scroll_edge.saturating_sub(slide);
        }
        if self.position > self.scroll_edge {
            self.scroll_offset += self.position - self.scroll_edge;
            self.scroll_edge = self.position;
        }
    }

    /// Byte offset of the `char_idx`-th character (buffer length when past
    /// the end).
    pub(crate) fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(b, _)| b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_right_at_end_is_noop() {
        let mut c = Cursor::new("ab");
        c.move_to(2);
        let before = (c.position, c.scroll_offset, c.scroll_edge);
        assert!(!c.move_right());
        assert_eq!((c.position, c.scroll_offset, c.scroll_edge), before);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut c = Cursor::new("ab");
        assert!(!c.backspace());
        assert_eq!(c.text(), "ab");
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn insert_then_backspace_round_trips() {
        let mut c = Cursor::new("hello");
        c.move_to(3);
        c.insert("x");
        assert_eq!(c.text(), "helxlo");
        assert_eq!(c.position(), 4);
        assert!(c.backspace());
        assert_eq!(c.text(), "hello");
        assert_eq!(c.position(), 3);
    }

    #[test]
    fn move_to_reaches_every_valid_position() {
        let text = "abcdef";
        for start in 0..=text.len() {
            for target in 0..=text.len() {
                let mut c = Cursor::new(text);
                c.move_to(start);
                c.move_to(target);
                assert_eq!(c.position(), target, "start {start} target {target}");
            }
        }
    }

    #[test]
    fn move_to_clamps_past_end() {
        let mut c = Cursor::new("abc");
        c.move_to(100);
        assert_eq!(c.position(), 3);
    }

    #[test]
    fn window_slides_right_past_edge() {
        let mut c = Cursor::new("abcdef");
        c.scroll_edge = 3;
        c.move_to(5);
        assert_eq!(c.position(), 5);
        assert_eq!(c.scroll_edge(), 5);
        assert_eq!(c.scroll_offset(), 2);
    }

    #[test]
    fn window_slides_left_below_offset() {
        let mut c = Cursor::new("abcdef");
        c.scroll_edge = 3;
        c.move_to(5);
        c.move_to(1);
        assert_eq!(c.position(), 1);
        assert_eq!(c.scroll_offset(), 1);
        assert_eq!(c.scroll_edge(), 4);
    }

    #[test]
    fn backspace_keeps_caret_pinned_at_scrolled_boundary() {
        let mut c = Cursor::new("abcdef");
        c.position = 6;
        c.scroll_offset = 2;
        c.scroll_edge = 6;
        assert!(c.backspace());
        assert_eq!(c.text(), "abcde");
        assert_eq!(c.position(), 5);
        assert_eq!(c.scroll_offset(), 1);
        assert_eq!(c.scroll_edge(), 5);
    }

    #[test]
    fn tick_catches_up_runaway_caret() {
        let mut c = Cursor::new("abcdef");
        c.position = 5;
        c.scroll_edge = 2;
        assert!(c.tick());
        assert_eq!(c.scroll_offset(), 3);
        assert_eq!(c.scroll_edge(), 5);
    }

    #[test]
    fn tick_toggles_blink_on_interval() {
        let mut c = Cursor::new("ab");
        c.set_blink_interval(Duration::ZERO);
        assert!(c.caret_visible());
        assert!(c.tick());
        assert!(!c.caret_visible());
        assert!(c.tick());
        assert!(c.caret_visible());
    }

    #[test]
    fn moves_force_caret_visible() {
        let mut c = Cursor::new("ab");
        c.set_caret_visible(false);
        assert!(c.move_right());
        assert!(c.caret_visible());
    }

    #[test]
    fn set_text_clamps_caret() {
        let mut c = Cursor::new("abcdef");
        c.move_to(6);
        c.set_text("ab");
        assert_eq!(c.position(), 2);
        assert!(c.scroll_offset() <= c.position());
    }

    #[test]
    fn multibyte_insert_and_backspace() {
        let mut c = Cursor::new("aé");
        c.move_to(2);
        c.insert("漢");
        assert_eq!(c.text(), "aé漢");
        assert_eq!(c.position(), 3);
        assert!(c.backspace());
        assert_eq!(c.text(), "aé");
        assert_eq!(c.position(), 2);
    }
}
