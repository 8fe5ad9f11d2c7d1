use sheet_core::{Notification, NotificationBoard, NotificationContainer, NotificationId};

/// Container that echoes each inserted alert to stderr.
#[derive(Debug, Default)]
pub(crate) struct TerminalContainer {
    board: NotificationBoard,
}

impl TerminalContainer {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl NotificationContainer for TerminalContainer {
    fn prepend(&self, notification: Notification) {
        eprintln!("[{}] {}", notification.severity, notification.message);
        self.board.prepend(notification);
    }

    fn remove(&self, id: NotificationId) -> bool {
        self.board.remove(id)
    }
}
