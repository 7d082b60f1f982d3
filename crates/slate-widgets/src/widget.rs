use crate::event::{Event, Key, KeyAction, MouseButton};

/// Capability set shared by every slate widget.
///
/// The variant set is small and fixed (Button, TextField, TextBox, Label),
/// so this trait is the entire dispatch surface; no downcasting is needed.
/// Event methods return an [`Event`] describing what the widget did with the
/// input, and idle processing returns a plain "redraw needed" flag.
pub trait Widget {
    /// Unique name assigned at construction.
    fn name(&self) -> &str;

    /// Process idle actions (caret blink, boundary catch-up). `selected`
    /// says whether the widget currently has focus. Returns whether a
    /// redraw is needed.
    fn handle(&mut self, selected: bool) -> bool;

    fn key_press(&mut self, key: Key, action: KeyAction) -> Event;

    fn char_press(&mut self, ch: char) -> Event;

    fn mouse_move(&mut self, x: f32, y: f32) -> Event;

    fn mouse_click(&mut self, x: f32, y: f32, button: MouseButton, action: KeyAction) -> Event;

    fn set_pos(&mut self, x: f32, y: f32);

    fn pos(&self) -> (f32, f32);

    fn set_dimensions(&mut self, w: f32, h: f32);

    fn dimensions(&self) -> (f32, f32);

    /// Whether the point lies inside the widget's bounds.
    fn contains(&self, x: f32, y: f32) -> bool;

    /// Set the widget's text, where it has one.
    fn set_text(&mut self, s: &str);

    fn text(&self) -> String;

    /// Move the caret, where the widget has one.
    fn set_caret(&mut self, index: usize);

    /// Current caret index, or `None` for widgets without one.
    fn caret(&self) -> Option<usize>;

    fn set_enabled(&mut self, enabled: bool);

    fn enabled(&self) -> bool;

    /// Whether the widget wants a redraw. Cleared by its layout pass.
    fn needs_redraw(&self) -> bool;
}
