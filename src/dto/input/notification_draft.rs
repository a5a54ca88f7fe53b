use crate::dto::{NotificationCategory, NotificationKind, NotificationPriority};
use serde::Serialize;
use std::collections::HashMap;
use time::OffsetDateTime;

///
/// Notification content as composed by an admin or faculty member,
/// before the server assigns an id and timestamps.
///
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub category: NotificationCategory,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}
