use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

/// Per-character glyph metrics consumed by the layout passes.
///
/// Advance widths and kerning adjustments are in the same linear unit as the
/// pixel-width budgets handed to the measurement functions. Implementations
/// must be queryable per character in sequence; the walk asks for the kerning
/// of each pair of adjacent characters as it goes.
pub trait GlyphMetrics {
    /// Advance width of `ch`.
    fn advance(&self, ch: char) -> f32;

    /// Kerning adjustment applied between `prev` and `next`.
    ///
    /// Defaults to zero for providers without pair kerning.
    fn kern(&self, prev: char, next: char) -> f32 {
        let _ = (prev, next);
        0.0
    }
}

/// Errors raised when a metrics provider cannot be resolved.
///
/// This is the engine's one externally observable failure mode: without a
/// glyph source no measurement can be produced, and callers are expected to
/// skip the draw pass cleanly rather than proceed with garbage widths.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("no metrics provider registered for font {0:?}")]
    UnknownFont(String),
    #[error("no font set, and no default font available")]
    NoDefault,
}

/// Convenient result alias for metrics-related operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Registry of glyph-metrics providers keyed by font name.
///
/// Lookup falls back to the registered default when the requested font is
/// missing or no name is given at all, mirroring how a draw path falls back
/// to the default font before giving up.
#[derive(Default)]
pub struct MetricsSource {
    providers: HashMap<String, Arc<dyn GlyphMetrics + Send + Sync>>,
    default: Option<String>,
}

impl MetricsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `name`. The first registration becomes the
    /// default unless one was chosen explicitly.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        provider: Arc<dyn GlyphMetrics + Send + Sync>,
    ) {
        let name = name.into();
        if self.default.is_none() {
            self.default = Some(name.clone());
        }
        self.providers.insert(name, provider);
    }

    /// Choose the default provider by name.
    pub fn set_default(&mut self, name: impl Into<String>) {
        self.default = Some(name.into());
    }

    /// Resolve `name`, falling back to the default provider.
    pub fn get(&self, name: Option<&str>) -> Result<Arc<dyn GlyphMetrics + Send + Sync>> {
        match name {
            Some(n) => self
                .providers
                .get(n)
                .cloned()
                .or_else(|| self.default_provider())
                .ok_or_else(|| MetricsError::UnknownFont(n.to_string())),
            None => self.default_provider().ok_or(MetricsError::NoDefault),
        }
    }

    fn default_provider(&self) -> Option<Arc<dyn GlyphMetrics + Send + Sync>> {
        self.default
            .as_deref()
            .and_then(|d| self.providers.get(d).cloned())
    }
}

/// Fixed-advance metrics for tests and headless layout.
#[derive(Debug, Clone, Copy)]
pub struct Monospace {
    pub advance: f32,
}

impl Monospace {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl GlyphMetrics for Monospace {
    fn advance(&self, _ch: char) -> f32 {
        self.advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_has_no_default() {
        let source = MetricsSource::new();
        assert!(matches!(source.get(None), Err(MetricsError::NoDefault)));
        assert!(matches!(
            source.get(Some("mono")),
            Err(MetricsError::UnknownFont(_))
        ));
    }

    #[test]
    fn first_registration_becomes_default() {
        let mut source = MetricsSource::new();
        source.register("mono", Arc::new(Monospace::new(7.0)));

        let m = source.get(None).unwrap();
        assert_eq!(m.advance('a'), 7.0);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        let mut source = MetricsSource::new();
        source.register("mono", Arc::new(Monospace::new(7.0)));

        let m = source.get(Some("missing")).unwrap();
        assert_eq!(m.advance('x'), 7.0);
    }

    #[test]
    fn explicit_default_wins() {
        let mut source = MetricsSource::new();
        source.register("narrow", Arc::new(Monospace::new(1.0)));
        source.register("wide", Arc::new(Monospace::new(9.0)));
        source.set_default("wide");

        let m = source.get(None).unwrap();
        assert_eq!(m.advance('x'), 9.0);
    }
}
