use std::sync::{Arc, Mutex};
use std::time::Duration;

use sheet_core::{NotificationBoard, Severity};
use sheet_engine::{
    copy_to_clipboard, try_copy_to_clipboard, ClipboardError, ClipboardWriter, Notifier,
    COPIED_MESSAGE, COPY_FAILED_MESSAGE,
};

#[derive(Default)]
struct FakeClipboard {
    contents: Mutex<Option<String>>,
    deny: bool,
}

#[async_trait::async_trait]
impl ClipboardWriter for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::Unavailable("permission denied".into()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

fn notifier() -> (Notifier, Arc<NotificationBoard>) {
    let board = Arc::new(NotificationBoard::new());
    (
        Notifier::new(board.clone(), Duration::from_millis(5000)),
        board,
    )
}

#[tokio::test]
async fn successful_copy_writes_text_and_notifies_success() {
    let clipboard = FakeClipboard::default();
    let (notifier, board) = notifier();

    copy_to_clipboard(&clipboard, &notifier, "id_abc123xyz").await;

    assert_eq!(
        clipboard.contents.lock().unwrap().as_deref(),
        Some("id_abc123xyz")
    );
    let shown = board.snapshot();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].severity, Severity::Success);
    assert_eq!(shown[0].message, COPIED_MESSAGE);
}

#[tokio::test]
async fn failed_copy_is_swallowed_but_notified() {
    sheet_logging::initialize_for_tests();
    let clipboard = FakeClipboard {
        deny: true,
        ..FakeClipboard::default()
    };
    let (notifier, board) = notifier();

    copy_to_clipboard(&clipboard, &notifier, "secret").await;

    let shown = board.snapshot();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].severity, Severity::Danger);
    assert_eq!(shown[0].message, COPY_FAILED_MESSAGE);
}

#[tokio::test]
async fn try_copy_reports_the_failure_too() {
    let clipboard = FakeClipboard {
        deny: true,
        ..FakeClipboard::default()
    };
    let (notifier, board) = notifier();

    let result = try_copy_to_clipboard(&clipboard, &notifier, "secret").await;

    assert_eq!(
        result,
        Err(ClipboardError::Unavailable("permission denied".into()))
    );
    assert_eq!(board.len(), 1);
}

#[tokio::test]
async fn copy_without_container_stays_silent() {
    let clipboard = FakeClipboard {
        deny: true,
        ..FakeClipboard::default()
    };
    copy_to_clipboard(&clipboard, &Notifier::detached(), "x").await;
}
