use std::time::Duration;

/// Runtime configuration for [`crate::Page`] and its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Origin that relative request URLs are resolved against.
    pub base_url: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
    /// Delay before a shown notification is removed again.
    pub notification_dismiss: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_response_bytes: 5 * 1024 * 1024,
            notification_dismiss: Duration::from_millis(5000),
        }
    }
}
