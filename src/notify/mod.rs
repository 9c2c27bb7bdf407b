//! # Notification Sink
//!
//! Fire-and-forget advisory messages shown to the user after an action
//! (lookup result, simulated shipment, submitted claim).
//!
//! The contract with the external notification renderer is a tri-field
//! message: **title**, **message**, **severity**. Delivery is first-in
//! first-displayed, there is no acknowledgement, and nothing survives a
//! reload. Only one notification is ever in flight per interaction, so the
//! channel is unbounded and a send never blocks.
//!
//! A page session holds a [`Notifier`]; the renderer (or a test) drains the
//! matching [`NotificationFeed`]. Dropping the feed silently discards
//! further notifications rather than failing the sender.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::trace;

/// Display severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational toast (default styling).
    Normal,
    /// Error-styled toast for failed lookups and rejected forms.
    Destructive,
}

/// A single advisory message for the notification renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Sending half of the notification sink. Cheap to clone; one per system.
#[derive(Clone)]
pub struct Notifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Creates a connected notifier/feed pair.
    pub fn channel() -> (Notifier, NotificationFeed) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Notifier { sender }, NotificationFeed { receiver })
    }

    /// Posts a normal-severity notification.
    pub fn notify(&self, title: impl Into<String>, message: impl Into<String>) {
        self.post(Notification::new(title, message, Severity::Normal));
    }

    /// Posts a destructive-severity notification.
    pub fn notify_destructive(&self, title: impl Into<String>, message: impl Into<String>) {
        self.post(Notification::new(title, message, Severity::Destructive));
    }

    /// Posts a notification. Fire-and-forget: a closed feed drops the
    /// message instead of surfacing an error to the page.
    pub fn post(&self, notification: Notification) {
        trace!(
            title = %notification.title,
            severity = ?notification.severity,
            "Posting notification"
        );
        if self.sender.send(notification).is_err() {
            trace!("Notification feed closed, message dropped");
        }
    }
}

/// Receiving half of the notification sink, consumed by the renderer.
pub struct NotificationFeed {
    receiver: mpsc::UnboundedReceiver<Notification>,
}

impl NotificationFeed {
    /// Waits for the next notification. `None` once every notifier is gone.
    pub async fn next(&mut self) -> Option<Notification> {
        self.receiver.recv().await
    }

    /// Non-blocking poll, for render loops and assertions.
    pub fn try_next(&mut self) -> Option<Notification> {
        self.receiver.try_recv().ok()
    }
}
