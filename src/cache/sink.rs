//! Debug sink for cache decisions
//!
//! The cache reports every decision (key normalization, path checks, match
//! results) through a [`DebugSink`]. The sink is fire-and-forget: it cannot
//! fail the calling operation.

/// One-way debug logging capability
pub trait DebugSink {
    /// Record a debug message
    fn debug(&self, message: &str);
}

/// Forwards messages to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DebugSink for NoopSink {
    fn debug(&self, _message: &str) {}
}

impl<F> DebugSink for F
where
    F: Fn(&str),
{
    fn debug(&self, message: &str) {
        self(message)
    }
}
