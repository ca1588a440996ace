//! Conversion observability hooks
//!
//! The converter itself performs no logging; callers inject an observer.
//! [`TracingObserver`] is the shipped default and reports through `tracing`.

use crate::error::ConvertError;

/// Callbacks invoked at the converter's notable events.
///
/// All methods default to no-ops so observers implement only what they
/// care about.
pub trait ConvertObserver {
    /// An interior LOD with no geometry data was skipped.
    fn lod_stripped(&self, lod_index: usize) {
        let _ = lod_index;
    }

    /// Conversion is about to abort with a validation error.
    fn validation_failed(&self, error: &ConvertError) {
        let _ = error;
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ConvertObserver for NullObserver {}

/// Default observer: reports events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ConvertObserver for TracingObserver {
    fn lod_stripped(&self, lod_index: usize) {
        tracing::debug!("Lod {lod_index} is stripped, skipping...");
    }

    fn validation_failed(&self, error: &ConvertError) {
        tracing::error!("static mesh conversion failed: {error}");
    }
}
