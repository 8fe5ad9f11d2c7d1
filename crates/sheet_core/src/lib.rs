//! Sheet core: pure formatting, validation and markup helpers for the front end.
mod datetime;
mod email;
mod id;
mod loader;
mod markup;
mod notification;
mod size;
mod text;

pub use datetime::{format_date_time, format_date_time_in, INVALID_DATE};
pub use email::is_valid_email;
pub use id::{generate_id, generate_id_with, ID_PREFIX, ID_RANDOM_LEN};
pub use loader::{LoadingIndicator, DEFAULT_LOADING_MESSAGE};
pub use markup::escape_html;
pub use notification::{
    Notification, NotificationBoard, NotificationContainer, NotificationId, ParseSeverityError,
    Severity,
};
pub use size::format_file_size;
pub use text::{truncate, DEFAULT_TRUNCATE_LENGTH, ELLIPSIS};
