use crate::markup::escape_html;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Detached spinner element. The caller inserts and removes the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingIndicator {
    message: String,
}

impl LoadingIndicator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"loader\">\n    <div class=\"spinner\"></div>\n    <p>{message}</p>\n</div>",
            message = escape_html(&self.message),
        )
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_MESSAGE)
    }
}
