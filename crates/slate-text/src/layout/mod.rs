pub mod cursor;
pub mod measure;
pub mod wrap;

pub use cursor::Cursor;
pub use measure::{CaretLayout, FitWidth, fit_width, locate_index_at_x};
