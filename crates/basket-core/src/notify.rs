//! # Notification Sink
//!
//! Fire-and-forget user-facing messages emitted by cart mutations. Not part
//! of engine correctness; a sink that drops every message is valid.

/// User-facing notification sink
pub trait Notifier: Send + Sync {
    /// Report a successful action ("Added to cart!")
    fn success(&self, message: &str);

    /// Report a user-visible failure
    fn error(&self, message: &str);
}

/// Default sink that writes notifications to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "basket::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "basket::notify", "{message}");
    }
}

/// Sink that drops every message, for tests and headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
