use sheet_core::Severity;
use sheet_logging::sheet_warn;

use crate::{ClipboardError, Notifier};

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy";

#[async_trait::async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, accessed on a blocking worker thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait::async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|err| ClipboardError::Write(err.to_string()))
        })
        .await
        .map_err(|err| ClipboardError::Write(err.to_string()))?
    }
}

/// Copies `text` and reports the outcome only through a notification.
pub async fn copy_to_clipboard(clipboard: &dyn ClipboardWriter, notifier: &Notifier, text: &str) {
    let _ = try_copy_to_clipboard(clipboard, notifier, text).await;
}

/// Like [`copy_to_clipboard`], but also hands the outcome back to the caller.
pub async fn try_copy_to_clipboard(
    clipboard: &dyn ClipboardWriter,
    notifier: &Notifier,
    text: &str,
) -> Result<(), ClipboardError> {
    match clipboard.write_text(text).await {
        Ok(()) => {
            notifier.show(COPIED_MESSAGE, Severity::Success);
            Ok(())
        }
        Err(err) => {
            sheet_warn!("Clipboard copy failed: {}", err);
            notifier.show(COPY_FAILED_MESSAGE, Severity::Danger);
            Err(err)
        }
    }
}
