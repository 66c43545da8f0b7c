//! Fire-and-forget user-facing toasts.
//!
//! Delivery is in-process and synchronous: the controller pushes a toast,
//! every registered sink sees it, nothing is retained by the manager
//! itself. Sinks decide what to do with it (log it, buffer it for a test).

use std::sync::{Arc, Mutex};

use tracing::info;

/// A user-facing toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }

    pub fn goal_added() -> Self {
        Self::new("Goal added!", "Start your digital detox with a new goal.")
    }

    pub fn goal_removed() -> Self {
        Self::new("Goal removed", "It was removed from your goal list.")
    }

    /// Shown after a snapshot submission, success and failure variants.
    pub fn verification_result(all_achieved: bool) -> Self {
        if all_achieved {
            Self::new(
                "Screen time data updated!",
                "Congratulations! You hit today's goals.",
            )
        } else {
            Self::new(
                "Screen time data updated!",
                "You missed today's goals. Try again tomorrow!",
            )
        }
    }

    pub fn analysis_complete() -> Self {
        Self::new(
            "Screenshot analysis complete!",
            "Your screen time data was updated automatically.",
        )
    }

    pub fn group_created() -> Self {
        Self::new("Group created!", "Invite your friends.")
    }

    pub fn group_joined() -> Self {
        Self::new("Joined the group!", "Start your new detox journey.")
    }

    pub fn invite_copied() -> Self {
        Self::new("Invite link copied!", "Share it with your friends.")
    }

    pub fn reaction_sent(congrats: bool) -> Self {
        let title = if congrats { "Congrats sent!" } else { "Cheer sent!" };
        Self::new(title, "Positive energy delivered.")
    }
}

/// Receives toasts pushed by the controller.
pub trait ToastSink: Send + Sync {
    fn deliver(&self, toast: &Toast);
}

/// Logs every toast through `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ToastSink for TracingSink {
    fn deliver(&self, toast: &Toast) {
        info!(title = %toast.title, "{}", toast.body);
    }
}

/// Buffers toasts so tests can assert on what was shown.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().expect("toast buffer poisoned").clone()
    }
}

impl ToastSink for MemorySink {
    fn deliver(&self, toast: &Toast) {
        self.toasts.lock().expect("toast buffer poisoned").push(toast.clone());
    }
}

/// Fans each toast out to every registered sink.
pub struct NotificationManager {
    sinks: Vec<Box<dyn ToastSink>>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self { sinks: vec![Box::new(TracingSink)] }
    }

    pub fn with_sink(mut self, sink: Box<dyn ToastSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn push(&self, toast: Toast) {
        for sink in &self.sinks {
            sink.deliver(&toast);
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
