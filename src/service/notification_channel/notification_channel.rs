use super::{ChannelEvent, ConnectionState};
use crate::{
    dto::{input, output},
    error::Error,
};
use async_trait::async_trait;
use tokio::sync::broadcast;
use uuid::Uuid;

///
/// Live view of the current user's notifications and unread count,
/// reconciled between realtime push events and REST fetches.
///
/// The channel degrades gracefully without an identity: it never
/// connects, fetches return empty/zero and mutations are no-ops,
/// so a consuming UI can render a disabled bell icon instead of
/// crashing. Only [create_notification] and [broadcast_notification]
/// report the missing identity as an error.
///
/// [create_notification]: NotificationChannel::create_notification
/// [broadcast_notification]: NotificationChannel::broadcast_notification
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    ///
    /// Open the realtime connection and start listening for
    /// pushed events.
    ///
    /// ### Returns
    /// Resulting connection state; Disconnected when there is
    /// no identity or the transport handshake failed
    ///
    async fn connect(&self) -> ConnectionState;

    ///
    /// Tear down the realtime connection (logout).
    ///
    async fn disconnect(&self);

    async fn connection_state(&self) -> ConnectionState;

    ///
    /// Pull one page of notifications from the server.
    ///
    /// Page 1 replaces the local list, subsequent pages append.
    /// The unread count is taken from the page metadata.
    ///
    /// ### Returns
    /// The local list after the fetch; empty when the fetch
    /// failed (logged, never surfaced as an error)
    ///
    async fn fetch_notifications(
        &self,
        pagination: input::Pagination,
    ) -> Vec<output::Notification>;

    ///
    /// Refresh only the unread counter from the server.
    ///
    /// ### Returns
    /// The refreshed count; 0 when the fetch failed
    ///
    async fn fetch_unread_count(&self) -> u64;

    ///
    /// Optimistically mark a notification as read and issue the
    /// server update in the background. No rollback on failure,
    /// the next fetch reconciles. Idempotent: already-read items
    /// do not decrement the counter.
    ///
    async fn mark_as_read(&self, id: &str);

    ///
    /// Optimistically mark every notification as read and zero
    /// the counter; server update issued in the background.
    ///
    async fn mark_all_as_read(&self);

    ///
    /// Remove a notification locally and issue the server delete
    /// in the background. The counter is decremented only when
    /// the removed notification was unread.
    ///
    async fn delete_notification(&self, id: &str);

    ///
    /// Create a notification for a single recipient.
    ///
    /// ### Errors
    /// - [Error::MissingIdentity] when no user is signed in
    /// - [Error::Api] when the server rejected the call
    ///
    async fn create_notification(
        &self,
        recipient_id: Uuid,
        draft: input::NotificationDraft,
    ) -> Result<output::Notification, Error>;

    ///
    /// Create one notification per recipient in a single call.
    ///
    /// ### Errors
    /// - [Error::MissingIdentity] when no user is signed in
    /// - [Error::Api] when the server rejected the call
    ///
    async fn broadcast_notification(
        &self,
        recipient_ids: Vec<Uuid>,
        draft: input::NotificationDraft,
    ) -> Result<output::BroadcastReceipt, Error>;

    ///
    /// Subscribe to local view changes.
    ///
    fn subscribe(&self) -> broadcast::Receiver<ChannelEvent>;

    ///
    /// Snapshot of the local notification list.
    ///
    async fn notifications(&self) -> Vec<output::Notification>;

    ///
    /// Snapshot of the local unread counter.
    ///
    async fn unread_count(&self) -> u64;
}
