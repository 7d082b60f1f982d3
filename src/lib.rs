//! slate: a small widget-toolkit core.
//!
//! The heavy lifting lives in the member crates:
//! - `slate-text`: text cursor engine (navigation, wrap pass, measurement,
//!   hit testing, caret blink)
//! - `slate-widgets`: logic-only widget elements and the `Ui` context
//! - `slate-config`: toolkit configuration (`slate.toml` + environment)
//!
//! This facade re-exports the pieces an embedder typically needs.

pub use slate_config::ToolkitConfig;
pub use slate_text::{
    Cursor, FitWidth, GlyphMetrics, MetricsError, MetricsSource, Monospace, fit_width,
    locate_index_at_x,
};
pub use slate_widgets::{
    Button, Event, Key, KeyAction, Label, MouseButton, TextBox, TextField, Ui, Widget,
};

pub mod config {
    pub use slate_config::*;
}

pub mod text {
    pub use slate_text::*;
}

pub mod widgets {
    pub use slate_widgets::*;
}
