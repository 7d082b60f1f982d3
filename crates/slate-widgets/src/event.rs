/// Result of handing an input event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The widget returned normally.
    None,
    /// The next widget should be selected.
    Next,
    /// The previous widget should be selected.
    Previous,
    /// The widget or the application should be closed.
    Exit,
    /// The user confirmed an action (typically Enter or a button click).
    Confirm,
    /// The user modified the widget (typed, moved the caret, scrolled).
    Action,
    /// The widget was selected.
    Selected,
    /// The widget currently wants control of the pointer shape.
    HasPointer,
}

/// Keyboard keys the widgets care about.
///
/// The toolkit owns its input enums so widgets stay independent of any
/// particular windowing binding; the embedder translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Enter,
    Tab,
    Escape,
}

/// Press phase of a key or mouse-button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
