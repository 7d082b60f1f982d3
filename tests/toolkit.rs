use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use slate::{
    Cursor, Event, Key, KeyAction, MetricsSource, Monospace, MouseButton, TextBox, TextField,
    ToolkitConfig, Ui, Widget,
};

fn ui() -> Ui {
    let mut source = MetricsSource::new();
    source.register("mono", Arc::new(Monospace::new(1.0)));
    let mut config = ToolkitConfig::default();
    config.text.wrap_pad = 0.0;
    Ui::new(config, Arc::new(source))
}

#[test]
fn field_typing_and_backspace_round_trip() -> Result<()> {
    let ui = ui();
    let mut field = TextField::new(&ui, 0.0, 0.0, 200.0, "hello", 75);
    field.set_caret(5);

    for ch in " world".chars() {
        assert_eq!(field.char_press(ch), Event::Action);
    }
    assert_eq!(field.text(), "hello world");

    for _ in 0..6 {
        assert_eq!(
            field.key_press(Key::Backspace, KeyAction::Press),
            Event::Action
        );
    }
    assert_eq!(field.text(), "hello");
    assert_eq!(field.caret(), Some(5));

    let layout = field.layout(true)?;
    assert_eq!(layout.text, "hello");
    Ok(())
}

#[test]
fn caret_navigation_hits_every_position() {
    let mut cursor = Cursor::new("abcdef");
    for p in [6, 0, 3, 5, 1] {
        assert!(cursor.move_to(p));
        assert_eq!(cursor.position(), p);
    }
    assert!(cursor.move_to(6));
    assert!(!cursor.move_right());
    assert!(cursor.move_to(0));
    assert!(!cursor.backspace());
}

#[test]
fn click_places_the_caret_under_the_pointer() {
    let ui = ui();
    let mut field = TextField::new(&ui, 20.0, 0.0, 50.0, "abcdef", 75);
    assert_eq!(
        field.mouse_click(24.5, 3.0, MouseButton::Left, KeyAction::Press),
        Event::Selected
    );
    assert_eq!(field.caret(), Some(4));
}

#[test]
fn box_wraps_on_newlines_and_width() {
    let ui = ui();
    let newline_box = TextBox::new(&ui, 0.0, 0.0, 100.0, 100.0, "ab\ncd");
    assert_eq!(
        newline_box.cursor().lines(),
        &["ab".to_string(), "cd".to_string()]
    );

    // twelve 1px glyphs against a 4px budget wrap into ceil(12 / 4) lines
    let narrow_box = TextBox::new(&ui, 0.0, 0.0, 4.0, 100.0, "abcdefghijkl");
    assert_eq!(narrow_box.cursor().lines().len(), 3);
}

#[test]
fn blink_toggles_only_for_the_selected_widget() {
    let ui = ui();
    let mut field = TextField::new(&ui, 0.0, 0.0, 100.0, "ab", 75);
    let mut cursor = Cursor::new("ab");
    cursor.set_blink_interval(Duration::ZERO);
    let before = cursor.caret_visible();
    assert!(cursor.tick());
    assert_ne!(cursor.caret_visible(), before);
    assert!(!field.handle(false));
}
