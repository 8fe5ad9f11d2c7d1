use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::markup::escape_html;

/// Alert flavour, rendered as the `alert-*` CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity {:?}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "danger" | "error" => Ok(Severity::Danger),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A transient alert element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(id: NotificationId, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
        }
    }

    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.severity)
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{class}\">{message}</div>",
            class = self.css_class(),
            message = escape_html(&self.message),
        )
    }
}

/// Mount point that notifications are inserted into.
pub trait NotificationContainer: Send + Sync {
    /// Inserts `notification` as the first child.
    fn prepend(&self, notification: Notification);

    /// Detaches the notification with `id`. Returns `false` if it was not attached.
    fn remove(&self, id: NotificationId) -> bool;
}

/// In-memory container, newest notification first.
#[derive(Debug, Default)]
pub struct NotificationBoard {
    items: Mutex<VecDeque<Notification>>,
}

impl NotificationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.items().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.items().iter().any(|n| n.id == id)
    }

    fn items(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationContainer for NotificationBoard {
    fn prepend(&self, notification: Notification) {
        self.items().push_front(notification);
    }

    fn remove(&self, id: NotificationId) -> bool {
        let mut items = self.items();
        match items.iter().position(|n| n.id == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }
}
