//! User-facing status notifications
//!
//! The transfer flow reports lifecycle events (announce, success,
//! failure) through a sink. Delivery is fire-and-forget: a sink must not
//! block the flow, and a notification that nobody renders is not an
//! error. Failures are reported to callers through return values, never
//! through the sink.

use std::fmt;
use tokio::sync::mpsc;

/// Notification severity, mirrored in how a shell renders the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// One user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Where the transfer flow sends status messages.
///
/// Emission order matches the order the flow produces them; nothing is
/// guaranteed about when (or whether) a shell renders them.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Sink backed by an unbounded channel, for shells that drain
/// notifications from their own event loop.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, message: &str, severity: Severity) {
        tracing::debug!(%severity, message = message, "notification");
        // A closed receiver means nobody is rendering anymore.
        let _ = self.tx.send(Notification {
            message: message.to_string(),
            severity,
        });
    }
}

/// Sink that discards everything, for embedders that only consume
/// return values.
pub struct NoOpSink;

impl NotificationSink for NoOpSink {
    fn notify(&self, message: &str, severity: Severity) {
        tracing::debug!(%severity, message = message, "notification discarded");
    }
}
