use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use sheet_core::{Notification, NotificationContainer, NotificationId, Severity};
use sheet_logging::{sheet_debug, sheet_trace};

/// Shows auto-dismissing notifications in an optional container.
///
/// Clones share the container and the id counter.
#[derive(Clone)]
pub struct Notifier {
    container: Option<Arc<dyn NotificationContainer>>,
    dismiss_after: Duration,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new(container: Arc<dyn NotificationContainer>, dismiss_after: Duration) -> Self {
        Self {
            container: Some(container),
            dismiss_after,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// A notifier without a mount point; every `show` is a no-op.
    pub fn detached() -> Self {
        Self {
            container: None,
            dismiss_after: Duration::ZERO,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    /// Prepends a notification and schedules its removal.
    ///
    /// Returns `None` without error when there is no container.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> Option<NotificationId> {
        let message = message.into();
        let Some(container) = self.container.clone() else {
            sheet_debug!("No notification container; dropping {} alert: {}", severity, message);
            return None;
        };

        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        container.prepend(Notification::new(id, message, severity));
        self.schedule_removal(container, id);
        Some(id)
    }

    fn schedule_removal(&self, container: Arc<dyn NotificationContainer>, id: NotificationId) {
        let delay = self.dismiss_after;
        let remove = move || {
            if !container.remove(id) {
                sheet_trace!("Notification {} already removed", id);
            }
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    remove();
                });
            }
            Err(_) => {
                thread::spawn(move || {
                    thread::sleep(delay);
                    remove();
                });
            }
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("has_container", &self.has_container())
            .field("dismiss_after", &self.dismiss_after)
            .finish()
    }
}
