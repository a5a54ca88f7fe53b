use crate::dto::{NotificationCategory, NotificationKind, NotificationPriority};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::OffsetDateTime;

///
/// Notification as stored on the server and mirrored in the local list.
///
/// Invariant: `is_read == false` implies `read_at == None`.
/// Every ingested notification goes through [Notification::normalized]
/// to uphold it regardless of what the server sent.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,
    pub is_read: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub read_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Displayed only, expiry is enforced server-side
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Notification {
    pub fn normalized(mut self) -> Self {
        if !self.is_read {
            self.read_at = None;
        }

        self
    }

    ///
    /// ### Returns
    /// true when the notification was unread and is now read,
    /// false when it was already read
    ///
    pub fn mark_read(&mut self, read_at: OffsetDateTime) -> bool {
        if self.is_read {
            return false;
        }

        self.is_read = true;
        self.read_at = Some(read_at);

        true
    }
}
