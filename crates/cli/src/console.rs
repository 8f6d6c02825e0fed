use kainji_form::{Notification, NotificationSink};
use tracing::debug;

/// Prints toasts to stdout, one per line
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        debug!(
            duration_ms = notification.duration.as_millis() as u64,
            "Showing toast"
        );
        println!("{}", notification);
    }
}
