//! The notification collaborator interface.
//!
//! Mutations report their outcome to a [`NotificationSink`], the in-process
//! stand-in for whatever user-facing toast or alert system sits outside this
//! crate. Notices are fire-and-forget: the sink never blocks the caller and
//! never fails. The notices are a side channel; operation results still
//! propagate to the caller as `Result` values.

use std::sync::Mutex;
use tracing::{info, warn};

/// Receives success and failure notices from donation mutations.
///
/// Implementations must be non-blocking and infallible.
pub trait NotificationSink: Send + Sync {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

/// A sink that routes notices to `tracing`, which is where the CLI surfaces
/// them to the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify_success(&self, message: &str) {
        info!(notice = "success", "{message}");
    }

    fn notify_failure(&self, message: &str) {
        warn!(notice = "failure", "{message}");
    }
}

/// One recorded notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Failure(message) => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failure(_))
    }
}

/// A sink that records every notice, in order. Used by the test suite and
/// available to embedders that render notices themselves.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of notices recorded so far.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Removes and returns all recorded notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for RecordingSink {
    fn notify_success(&self, message: &str) {
        self.lock().push(Notice::Success(message.to_string()));
    }

    fn notify_failure(&self, message: &str) {
        self.lock().push(Notice::Failure(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.notify_success("Donation added: $100.00 to Red Cross");
        sink.notify_failure("Failed to delete donation");
        assert_eq!(sink.count(), 2);

        let notices = sink.take();
        assert_eq!(
            notices[0],
            Notice::Success("Donation added: $100.00 to Red Cross".to_string())
        );
        assert!(notices[1].is_failure());
        assert_eq!(notices[1].message(), "Failed to delete donation");
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_log_sink_never_fails() {
        let sink = LogSink;
        sink.notify_success("Donation updated");
        sink.notify_failure("Failed to update donation");
    }
}
