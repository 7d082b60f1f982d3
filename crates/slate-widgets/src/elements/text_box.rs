use std::sync::Arc;
use std::time::Duration;

use slate_text::{Cursor, MetricsSource};
use tracing::{debug, warn};

use crate::context::Ui;
use crate::event::{Event, Key, KeyAction, MouseButton};
use crate::widget::Widget;

/// What the draw path needs for a multi-line box this frame: the visible
/// line window, ordered bottom-up (the first entry is drawn lowest).
#[derive(Debug, Clone, PartialEq)]
pub struct BoxLayout {
    pub lines: Vec<String>,
}

/// Multi-line text entry over a [`Cursor`] plus its wrap pass.
///
/// The line table is regenerated on construction, text replacement, line
/// append, typing, and resize; Up/Down scroll the visible line window.
pub struct TextBox {
    cursor: Cursor,
    name: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    maxlen: usize,
    text_size: f32,
    line_pad: f32,
    wrap_pad: f32,
    enabled: bool,
    redraw: bool,
    hovered: bool,
    metrics: Arc<MetricsSource>,
    font: Option<String>,
}

impl TextBox {
    pub fn new(
        ui: &Ui,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: impl Into<String>,
    ) -> Self {
        let mut cursor = Cursor::new(text);
        cursor.set_blink_interval(Duration::from_millis(ui.config().text.blink_interval_ms));
        let mut text_box = Self {
            cursor,
            name: ui.name_widget("TextBox"),
            x,
            y,
            width,
            height,
            maxlen: ui.config().input.default_max_len,
            text_size: ui.config().text.size,
            line_pad: ui.config().text.line_pad,
            wrap_pad: ui.config().text.wrap_pad,
            enabled: false,
            redraw: true,
            hovered: false,
            metrics: ui.metrics().clone(),
            font: None,
        };
        text_box.regenerate();
        text_box.reshape();
        text_box
    }

    /// Append `s` as a new logical line and re-run the wrap pass.
    pub fn insert_line(&mut self, s: &str) {
        self.cursor.insert_line(s);
        self.regenerate();
        self.redraw = true;
    }

    /// Layout pass for the draw path: the visible window of wrapped lines,
    /// bottom-up, honoring the line scroll position.
    pub fn layout(&mut self) -> BoxLayout {
        let lines = self.cursor.lines();
        let mut visible = Vec::new();
        let mut i = 0;
        while i < self.cursor.max_lines() && i + self.cursor.line_offset() < lines.len() {
            visible.push(lines[lines.len() - 1 - i - self.cursor.line_offset()].clone());
            i += 1;
        }
        self.redraw = false;
        BoxLayout { lines: visible }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Whether the pointer is currently over the box.
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    fn regenerate(&mut self) {
        match self.metrics.get(self.font.as_deref()) {
            Ok(m) => self.cursor.generate_lines(&*m, self.width, self.wrap_pad),
            Err(err) => warn!(%err, name = %self.name, "wrap pass skipped"),
        }
    }

    /// Recompute how many lines fit the box's height.
    fn reshape(&mut self) {
        let line_height = self.text_size + self.line_pad;
        let max_lines = ((self.height - 2.0) / line_height).max(0.0) as usize;
        debug!(name = %self.name, max_lines, "text box reshaped");
        self.cursor.set_max_lines(max_lines);
        self.redraw = true;
    }
}

impl Widget for TextBox {
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
            Key::Up => {
                if self.cursor.scroll_line_up() {
                    self.redraw = true;
                    return Event::Action;
                }
            }
            Key::Down => {
                if self.cursor.scroll_line_down() {
                    self.redraw = true;
                    return Event::Action;
                }
            }
            _ => {}
        }
        Event::None
    }

    fn char_press(&mut self, ch: char) -> Event {
        if self.cursor.char_len() >= self.maxlen {
            return Event::None;
        }
        self.cursor.insert(ch.encode_utf8(&mut [0; 4]));
        self.regenerate();
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
        self.reshape();
    }

    fn pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn set_dimensions(&mut self, w: f32, h: f32) {
        self.width = w;
        self.height = h;
        self.reshape();
        self.regenerate();
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
        self.regenerate();
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
