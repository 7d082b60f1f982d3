use std::sync::Arc;
use std::time::Duration;

use slate_text::{Cursor, MetricsError, MetricsSource, fit_width};
use tracing::warn;

use crate::context::Ui;
use crate::event::{Event, Key, KeyAction, MouseButton};
use crate::widget::Widget;

/// What the draw path needs for a single-line field this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    /// The visible slice of the buffer that fits the field's width.
    pub text: String,
    /// Measured width of that slice.
    pub width: f32,
    /// Caret x relative to the field's text origin; `None` when the caret
    /// is not drawn this pass (unselected, or blinked off).
    pub caret_x: Option<f32>,
}

/// Single-line text entry over a [`Cursor`].
///
/// The field owns the cursor engine and enforces `maxlen`; the embedder
/// calls [`TextField::layout`] on its draw path and paints the result.
pub struct TextField {
    cursor: Cursor,
    name: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    maxlen: usize,
    enabled: bool,
    redraw: bool,
    hovered: bool,
    metrics: Arc<MetricsSource>,
    font: Option<String>,
}

impl TextField {
    pub fn new(ui: &Ui, x: f32, y: f32, width: f32, text: impl Into<String>, maxlen: usize) -> Self {
        let mut cursor = Cursor::new(text);
        cursor.set_blink_interval(Duration::from_millis(ui.config().text.blink_interval_ms));
        Self {
            cursor,
            name: ui.name_widget("TextField"),
            x,
            y,
            width,
            height: ui.config().text.size + 7.0,
            maxlen,
            enabled: true,
            redraw: true,
            hovered: false,
            metrics: ui.metrics().clone(),
            font: None,
        }
    }

    /// Layout pass for the draw path.
    ///
    /// Selected fields run the cursor-aware measurement (which also refreshes
    /// the scroll boundary); unselected fields just fit the scrolled slice.
    /// Fails when no glyph metrics are available, so the caller can skip the
    /// draw cleanly.
    pub fn layout(&mut self, selected: bool) -> Result<FieldLayout, MetricsError> {
        let m = self.metrics.get(self.font.as_deref())?;
        let inner = (self.width - 2.0).max(0.0);
        let layout = if selected {
            let l = self.cursor.layout_visible(&*m, inner);
            FieldLayout {
                text: self
                    .cursor
                    .text()
                    .chars()
                    .skip(self.cursor.scroll_offset())
                    .take(l.fitted)
                    .collect(),
                width: l.width,
                caret_x: l.caret_visible.then_some(l.caret_x),
            }
        } else {
            let visible: String = self
                .cursor
                .text()
                .chars()
                .skip(self.cursor.scroll_offset())
                .collect();
            let fit = fit_width(&*m, &visible, inner);
            FieldLayout {
                text: visible.chars().take(fit.fitted).collect(),
                width: fit.width,
                caret_x: None,
            }
        };
        self.redraw = false;
        Ok(layout)
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Whether the pointer is currently over the field.
    pub fn hovered(&self) -> bool {
        self.hovered
    }
}

impl Widget for TextField {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&mut self, selected: bool) -> bool {
        if selected && self.cursor.tick() {
            self.redraw = true;
            return true;
        }
        false
    }

    fn key_press(&mut self, key: Key, action: KeyAction) -> Event {
        if action == KeyAction::Release {
            return Event::None;
        }
        match key {
            Key::Left => {
                if self.cursor.move_left() {
                    self.redraw = true;
                    return Event::Action;
                }
            }
            Key::Right => {
                if self.cursor.move_right() {
                    self.redraw = true;
                    return Event::Action;
                }
            }
            Key::Backspace => {
                if self.cursor.backspace() {
                    self.redraw = true;
                    return Event::Action;
                }
            }
            Key::Enter => return Event::Confirm,
            _ => {}
        }
        Event::None
    }

    fn char_press(&mut self, ch: char) -> Event {
        if self.cursor.char_len() >= self.maxlen {
            return Event::None;
        }
        self.cursor.insert(ch.encode_utf8(&mut [0; 4]));
        self.redraw = true;
        Event::Action
    }

    fn mouse_move(&mut self, x: f32, y: f32) -> Event {
        if !self.contains(x, y) {
            self.hovered = false;
            return Event::None;
        }
        self.hovered = true;
        Event::HasPointer
    }

    fn mouse_click(&mut self, x: f32, y: f32, button: MouseButton, action: KeyAction) -> Event {
        if button == MouseButton::Left && action == KeyAction::Press {
            self.redraw = true;
            if !self.contains(x, y) {
                return Event::None;
            }
        } else {
            return Event::None;
        }
        // hidden now; the blink toggle brings it back before the next draw
        self.cursor.set_caret_visible(false);
        match self.metrics.get(self.font.as_deref()) {
            Ok(m) => {
                self.cursor.click_to_place(&*m, x - self.x, self.width);
            }
            Err(err) => warn!(%err, name = %self.name, "click placement skipped"),
        }
        Event::Selected
    }

    fn set_pos(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.redraw = true;
    }

    fn pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn set_dimensions(&mut self, w: f32, h: f32) {
        self.width = w;
        self.height = h;
        self.redraw = true;
    }

    fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    fn set_text(&mut self, s: &str) {
        let capped: String = if s.chars().count() > self.maxlen {
            s.chars().take(self.maxlen).collect()
        } else {
            s.to_string()
        };
        self.cursor.set_text(capped);
        self.redraw = true;
    }

    fn text(&self) -> String {
        self.cursor.text().to_string()
    }

    fn set_caret(&mut self, index: usize) {
        if self.cursor.move_to(index) {
            self.redraw = true;
        }
    }

    fn caret(&self) -> Option<usize> {
        Some(self.cursor.position())
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.redraw = true;
        }
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn needs_redraw(&self) -> bool {
        self.redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_config::ToolkitConfig;
    use slate_text::Monospace;

    fn ui(advance: f32) -> Ui {
        let mut source = MetricsSource::new();
        source.register("mono", Arc::new(Monospace::new(advance)));
        Ui::new(ToolkitConfig::default(), Arc::new(source))
    }

    #[test]
    fn typing_advances_the_caret() {
        let ui = ui(1.0);
        let mut f = TextField::new(&ui, 0.0, 0.0, 100.0, "", 10);
        assert_eq!(f.char_press('h'), Event::Action);
        assert_eq!(f.char_press('i'), Event::Action);
        assert_eq!(f.text(), "hi");
        assert_eq!(f.caret(), Some(2));
    }

    #[test]
    fn maxlen_stops_accepting_characters() {
        let ui = ui(1.0);
        let mut f = TextField::new(&ui, 0.0, 0.0, 100.0, "Testing123456789", 75);
        f.set_caret(16);
        for _ in 0..100 {
            f.char_press('5');
        }
        assert_eq!(f.text().chars().count(), 75);
        assert_eq!(f.char_press('5'), Event::None);
        assert_eq!(f.text().chars().count(), 75);
    }

    #[test]
    fn left_at_start_and_backspace_at_start_do_nothing() {
        let ui = ui(1.0);
        let mut f = TextField::new(&ui, 0.0, 0.0, 100.0, "ab", 10);
        assert_eq!(f.key_press(Key::Left, KeyAction::Press), Event::None);
        assert_eq!(f.key_press(Key::Backspace, KeyAction::Press), Event::None);
        assert_eq!(f.text(), "ab");
    }

    #[test]
    fn enter_confirms_and_releases_are_ignored() {
        let ui = ui(1.0);
        let mut f = TextField::new(&ui, 0.0, 0.0, 100.0, "ab", 10);
        assert_eq!(f.key_press(Key::Enter, KeyAction::Press), Event::Confirm);
        assert_eq!(f.key_press(Key::Right, KeyAction::Release), Event::None);
    }

    #[test]
    fn click_inside_places_the_caret() {
        let ui = ui(1.0);
        let mut f = TextField::new(&ui, 10.0, 0.0, 20.0, "abcdef", 10);
        let ev = f.mouse_click(13.5, 2.0, MouseButton::Left, KeyAction::Press);
        assert_eq!(ev, Event::Selected);
        assert_eq!(f.caret(), Some(3));
    }

    #[test]
    fn click_outside_deselects_nothing() {
        let ui = ui(1.0);
        let mut f = TextField::new(&ui, 10.0, 0.0, 20.0, "abcdef", 10);
        let ev = f.mouse_click(500.0, 500.0, MouseButton::Left, KeyAction::Press);
        assert_eq!(ev, Event::None);
        assert_eq!(f.caret(), Some(0));
    }

    #[test]
    fn layout_reports_visible_slice_and_caret() {
        let ui = ui(2.0);
        let mut f = TextField::new(&ui, 0.0, 0.0, 100.0, "abc", 10);
        f.set_caret(2);
        let l = f.layout(true).unwrap();
        assert_eq!(l.text, "abc");
        assert_eq!(l.caret_x, Some(4.0));
        assert!(!f.needs_redraw());
    }

    #[test]
    fn layout_unselected_has_no_caret() {
        let ui = ui(2.0);
        let mut f = TextField::new(&ui, 0.0, 0.0, 8.0, "abcdef", 10);
        let l = f.layout(false).unwrap();
        // inner budget is width - 2 = 6, so three 2px glyphs fit
        assert_eq!(l.text, "abc");
        assert_eq!(l.caret_x, None);
    }

    #[test]
    fn layout_fails_without_metrics() {
        let ui = Ui::new(ToolkitConfig::default(), Arc::new(MetricsSource::new()));
        let mut f = TextField::new(&ui, 0.0, 0.0, 100.0, "ab", 10);
        assert!(f.layout(true).is_err());
    }

    #[test]
    fn set_text_caps_at_maxlen_and_clamps_caret() {
        let ui = ui(1.0);
        let mut f = TextField::new(&ui, 0.0, 0.0, 100.0, "abcdef", 4);
        f.set_caret(6);
        f.set_text("xyzxyz");
        assert_eq!(f.text(), "xyzx");
        assert!(f.caret().unwrap() <= 4);
    }

    #[test]
    fn idle_tick_requests_redraw_only_when_selected() {
        let ui = ui(1.0);
        let mut f = TextField::new(&ui, 0.0, 0.0, 100.0, "ab", 10);
        f.cursor.set_blink_interval(Duration::ZERO);
        assert!(!f.handle(false));
        assert!(f.handle(true));
    }
}
