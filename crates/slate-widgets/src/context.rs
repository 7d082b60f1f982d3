use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use slate_config::ToolkitConfig;
use slate_text::MetricsSource;

/// Shared context for one widget tree: configuration, glyph metrics, and the
/// counter behind unique widget names.
///
/// Each independent UI owns its own `Ui`, so widget names never collide
/// across trees in the same process (a test can build several side by side).
pub struct Ui {
    config: ToolkitConfig,
    metrics: Arc<MetricsSource>,
    widget_count: AtomicU32,
}

impl Ui {
    pub fn new(config: ToolkitConfig, metrics: Arc<MetricsSource>) -> Self {
        Self {
            config,
            metrics,
            widget_count: AtomicU32::new(0),
        }
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<MetricsSource> {
        &self.metrics
    }

    /// Produce a unique widget name like `"TextField-3"`.
    pub fn name_widget(&self, kind: &str) -> String {
        format!("{}-{}", kind, self.widget_count.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
