use super::Error;
use crate::dto::{input, output};
use async_trait::async_trait;
use uuid::Uuid;

///
/// Contract of the notifications part of the REST backend.
///
/// The backend is authoritative for all notification state;
/// this trait only transports it.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsApi: Send + Sync {
    ///
    /// Fetch one page of the current user's notifications.
    ///
    /// ### Returns
    /// Page of notifications with pagination metadata,
    /// including the server-side unread count
    ///
    async fn fetch_notifications(
        &self,
        pagination: input::Pagination,
    ) -> Result<output::NotificationPage, Error>;

    ///
    /// Fetch only the unread counter.
    ///
    async fn fetch_unread_count(&self) -> Result<u64, Error>;

    ///
    /// Mark a single notification as read.
    ///
    async fn mark_as_read(&self, id: &str) -> Result<(), Error>;

    ///
    /// Mark every notification of the current user as read.
    ///
    async fn mark_all_as_read(&self) -> Result<(), Error>;

    ///
    /// Delete a single notification.
    ///
    async fn delete_notification(&self, id: &str) -> Result<(), Error>;

    ///
    /// Create a notification for a single recipient.
    ///
    /// ### Returns
    /// The created notification as stored by the server
    ///
    async fn create_notification(
        &self,
        recipient_id: Uuid,
        draft: input::NotificationDraft,
    ) -> Result<output::Notification, Error>;

    ///
    /// Create one notification per recipient in a single call.
    ///
    async fn broadcast_notification(
        &self,
        recipient_ids: Vec<Uuid>,
        draft: input::NotificationDraft,
    ) -> Result<output::BroadcastReceipt, Error>;
}
