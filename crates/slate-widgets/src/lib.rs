//! Logic-only widget elements for slate.
//!
//! These mirror a classic small widget set (button, label, single-line text
//! field, multi-line text box) but carry no painting code: each widget
//! processes input events, tracks its redraw state, and exposes a layout
//! pass that reports what a draw path needs (visible text slice, caret x,
//! visible line window). The embedder owns rendering, the window, and
//! pointer-shape changes; widgets only report when they want the pointer via
//! [`Event::HasPointer`].
//!
//! All widgets must be driven from a single logical thread; nothing here
//! synchronizes internally beyond the [`Ui`] name counter.

pub mod context;
pub mod elements;
pub mod event;
pub mod widget;

pub use context::Ui;
pub use elements::{BoxLayout, Button, FieldLayout, Label, TextBox, TextField};
pub use event::{Event, Key, KeyAction, MouseButton};
pub use widget::Widget;
