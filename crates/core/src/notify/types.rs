//! Types for the notify module.

use serde::Serialize;

/// Mail priority. Normal for success and no-match runs, High for failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Normal,
    High,
}

impl Priority {
    /// X-Priority header value (1 = highest, 3 = normal).
    pub fn header_value(&self) -> &'static str {
        match self {
            Self::Normal => "3",
            Self::High => "1",
        }
    }
}

/// A rendered, ready-to-send report of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub subject: String,
    pub body: String,
    pub priority: Priority,
    pub recipients: Vec<String>,
}
