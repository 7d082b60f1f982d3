use std::sync::Arc;

use slate_text::{MetricsSource, fit_width};
use tracing::warn;

use crate::context::Ui;
use crate::event::{Event, Key, KeyAction, MouseButton};
use crate::widget::Widget;

/// Static text. Ignores input; its width follows the measured text extent.
pub struct Label {
    name: String,
    text: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    redraw: bool,
    metrics: Arc<MetricsSource>,
    font: Option<String>,
}

impl Label {
    pub fn new(ui: &Ui, x: f32, y: f32, text: impl Into<String>) -> Self {
        let mut label = Self {
            name: ui.name_widget("Label"),
            text: text.into(),
            x,
            y,
            width: 0.0,
            height: ui.config().text.size + 6.0,
            redraw: true,
            metrics: ui.metrics().clone(),
            font: None,
        };
        label.reshape();
        label
    }

    fn reshape(&mut self) {
        match self.metrics.get(self.font.as_deref()) {
            Ok(m) => {
                self.width = fit_width(&*m, &self.text, f32::INFINITY).width + 5.0;
            }
            Err(err) => warn!(%err, name = %self.name, "label reshape skipped"),
        }
        self.redraw = true;
    }
}

impl Widget for Label {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&mut self, _selected: bool) -> bool {
        false
    }

    fn key_press(&mut self, _key: Key, _action: KeyAction) -> Event {
        Event::None
    }

    fn char_press(&mut self, _ch: char) -> Event {
        Event::None
    }

    fn mouse_move(&mut self, _x: f32, _y: f32) -> Event {
        Event::None
    }

    fn mouse_click(&mut self, _x: f32, _y: f32, _button: MouseButton, _action: KeyAction) -> Event {
        Event::None
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
        // reshape recomputes the width from the text
        self.reshape();
    }

    fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    fn set_text(&mut self, s: &str) {
        self.text = s.to_string();
        self.reshape();
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_caret(&mut self, _index: usize) {}

    fn caret(&self) -> Option<usize> {
        None
    }

    fn set_enabled(&mut self, _enabled: bool) {}

    fn enabled(&self) -> bool {
        true
    }

    fn needs_redraw(&self) -> bool {
        self.redraw
    }
}
