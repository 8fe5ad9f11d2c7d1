use std::sync::Arc;

use serde_json::Value;
use sheet_core::{NotificationContainer, NotificationId, Severity};
use sheet_logging::sheet_info;

use crate::clipboard::{copy_to_clipboard, try_copy_to_clipboard};
use crate::{
    ApiClient, ApiError, ClientSettings, ClipboardError, ClipboardWriter, Method, Notifier,
    SystemClipboard,
};

/// Logged once the page context is up.
pub const READY_MESSAGE: &str = "Answer Sheet Evaluation System loaded";

/// The helpers a page script works with, wired to one notification container.
#[derive(Clone)]
pub struct Page {
    notifier: Notifier,
    api: ApiClient,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl Page {
    /// Production wiring: reqwest transport and the system clipboard.
    pub fn new(
        settings: &ClientSettings,
        container: Option<Arc<dyn NotificationContainer>>,
    ) -> Result<Self, ApiError> {
        let notifier = match container {
            Some(container) => Notifier::new(container, settings.notification_dismiss),
            None => Notifier::detached(),
        };
        let api = ApiClient::from_settings(settings, notifier.clone())?;
        Ok(Self::from_parts(notifier, api, Arc::new(SystemClipboard)))
    }

    pub fn from_parts(
        notifier: Notifier,
        api: ApiClient,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        Self {
            notifier,
            api,
            clipboard,
        }
    }

    pub fn on_ready(&self) {
        sheet_info!("{}", READY_MESSAGE);
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Option<NotificationId> {
        self.notifier.show(message, severity)
    }

    pub async fn api_call(
        &self,
        url: &str,
        method: Method,
        data: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.api.call(url, method, data).await
    }

    pub async fn copy_to_clipboard(&self, text: &str) {
        copy_to_clipboard(self.clipboard.as_ref(), &self.notifier, text).await;
    }

    pub async fn try_copy_to_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        try_copy_to_clipboard(self.clipboard.as_ref(), &self.notifier, text).await
    }
}
