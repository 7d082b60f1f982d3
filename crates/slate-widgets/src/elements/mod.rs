//! The widget set. Logic and layout only; the embedder paints.

pub mod button;
pub mod label;
pub mod text_box;
pub mod text_field;

pub use button::Button;
pub use label::Label;
pub use text_box::{BoxLayout, TextBox};
pub use text_field::{FieldLayout, TextField};
