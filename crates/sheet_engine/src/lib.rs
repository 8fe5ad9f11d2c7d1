//! Sheet engine: notifications, requests, clipboard and timing for the front end.
mod api;
mod clipboard;
mod debounce;
mod notifier;
mod page;
mod settings;
mod transport;
mod types;

pub use api::ApiClient;
pub use clipboard::{
    copy_to_clipboard, try_copy_to_clipboard, ClipboardWriter, SystemClipboard, COPIED_MESSAGE,
    COPY_FAILED_MESSAGE,
};
pub use debounce::{debounce, Debounced};
pub use notifier::Notifier;
pub use page::{Page, READY_MESSAGE};
pub use settings::ClientSettings;
pub use transport::{ReqwestTransport, Transport};
pub use types::{ApiError, ApiRequest, ApiResponse, ClipboardError, Method, ParseMethodError};
