use super::Notification;
use serde::Deserialize;

///
/// One page of the user's notifications together with the
/// pagination metadata the server reports alongside it.
///
/// `unread_count` is the authoritative server-side counter,
/// the client reconciles its local counter from it.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub unread_count: u64,
}
