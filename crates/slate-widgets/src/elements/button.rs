use std::sync::Arc;

use slate_text::{MetricsSource, fit_width};
use tracing::warn;

use crate::context::Ui;
use crate::event::{Event, Key, KeyAction, MouseButton};
use crate::widget::Widget;

/// A push button. Confirms on Enter or a left click inside its bounds, and
/// asks for the pointer while hovered.
pub struct Button {
    name: String,
    text: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text_size: f32,
    enabled: bool,
    redraw: bool,
    hovered: bool,
    metrics: Arc<MetricsSource>,
    font: Option<String>,
}

impl Button {
    pub fn new(ui: &Ui, x: f32, y: f32, text: impl Into<String>) -> Self {
        let text_size = ui.config().text.size;
        let mut button = Self {
            name: ui.name_widget("Button"),
            text: text.into(),
            x,
            y,
            width: 0.0,
            height: text_size + 13.0,
            text_size,
            enabled: true,
            redraw: true,
            hovered: false,
            metrics: ui.metrics().clone(),
            font: None,
        };
        button.reshape();
        button
    }

    /// Whether the pointer is currently over the button.
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Recompute the width from the label's measured extent.
    fn reshape(&mut self) {
        match self.metrics.get(self.font.as_deref()) {
            Ok(m) => {
                self.width = fit_width(&*m, &self.text, f32::INFINITY).width + 6.0;
            }
            Err(err) => warn!(%err, name = %self.name, "button reshape skipped"),
        }
        self.redraw = true;
    }
}

impl Widget for Button {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&mut self, _selected: bool) -> bool {
        false
    }

    fn key_press(&mut self, key: Key, action: KeyAction) -> Event {
        if action == KeyAction::Release {
            return Event::None;
        }
        if key == Key::Enter {
            return Event::Confirm;
        }
        Event::None
    }

    fn char_press(&mut self, _ch: char) -> Event {
        Event::None
    }

    fn mouse_move(&mut self, x: f32, y: f32) -> Event {
        let inside = self.contains(x, y);
        if self.hovered && !inside {
            self.hovered = false;
            self.redraw = true;
            return Event::Action;
        } else if !inside {
            return Event::None;
        }
        if !self.hovered {
            self.hovered = true;
            self.redraw = true;
        }
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
        Event::Confirm
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
        // reshape recomputes the width from the label
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

    fn ui() -> Ui {
        let mut source = MetricsSource::new();
        source.register("mono", Arc::new(Monospace::new(2.0)));
        Ui::new(ToolkitConfig::default(), Arc::new(source))
    }

    #[test]
    fn width_tracks_label_text() {
        let ui = ui();
        let mut b = Button::new(&ui, 0.0, 0.0, "ab");
        assert_eq!(b.dimensions().0, 10.0); // 2 glyphs * 2.0 + 6
        b.set_text("abcd");
        assert_eq!(b.dimensions().0, 14.0);
    }

    #[test]
    fn enter_confirms_and_release_is_ignored() {
        let ui = ui();
        let mut b = Button::new(&ui, 0.0, 0.0, "ok");
        assert_eq!(b.key_press(Key::Enter, KeyAction::Press), Event::Confirm);
        assert_eq!(b.key_press(Key::Enter, KeyAction::Release), Event::None);
        assert_eq!(b.key_press(Key::Left, KeyAction::Press), Event::None);
    }

    #[test]
    fn click_confirms_only_inside() {
        let ui = ui();
        let mut b = Button::new(&ui, 10.0, 10.0, "ok");
        assert_eq!(
            b.mouse_click(12.0, 12.0, MouseButton::Left, KeyAction::Press),
            Event::Confirm
        );
        assert_eq!(
            b.mouse_click(500.0, 500.0, MouseButton::Left, KeyAction::Press),
            Event::None
        );
        assert_eq!(
            b.mouse_click(12.0, 12.0, MouseButton::Left, KeyAction::Release),
            Event::None
        );
    }

    #[test]
    fn hover_transitions_request_redraws() {
        let ui = ui();
        let mut b = Button::new(&ui, 10.0, 10.0, "ok");
        assert_eq!(b.mouse_move(12.0, 12.0), Event::HasPointer);
        assert!(b.hovered());
        // leaving the button reports a state change
        assert_eq!(b.mouse_move(500.0, 500.0), Event::Action);
        assert!(!b.hovered());
        assert_eq!(b.mouse_move(500.0, 500.0), Event::None);
    }

    #[test]
    fn missing_metrics_leaves_width_alone() {
        let ui = Ui::new(
            ToolkitConfig::default(),
            Arc::new(MetricsSource::new()),
        );
        let b = Button::new(&ui, 0.0, 0.0, "ok");
        assert_eq!(b.dimensions().0, 0.0);
    }
}
