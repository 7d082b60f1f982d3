//! slate-text: the text cursor engine behind slate's text-entry widgets.
//!
//! The pieces here are deliberately small and self-contained:
//! - `metrics`: the glyph-metrics seam (per-character advance + kerning)
//!   and the provider registry with its single failure mode
//! - `layout`: cursor/scroll-window bookkeeping, the greedy wrap pass,
//!   width-limited measurement and click-to-caret hit testing
//!
//! Nothing in this crate rasterizes, shapes, or paints. Widgets drive the
//! engine with discrete edit/navigation commands and then run a measurement
//! pass to learn what fits and where the caret goes.

pub mod layout;
pub mod metrics;

pub use layout::{CaretLayout, Cursor, FitWidth, fit_width, locate_index_at_x};
pub use metrics::{GlyphMetrics, MetricsError, MetricsSource, Monospace};
